//! Server-side rendering of the browser view. The page ships with the class
//! list and the full liquids table; `static/app.js` takes over from there.

use crate::catalog::view::liquid_views;
use crate::catalog::{LiquidView, Parameter, QueryService};

const INDEX_TEMPLATE: &str = include_str!("static/index.html");

/// Shown in place of a molar weight for mixtures and solutions.
pub const NOT_APPLICABLE: &str = "—";

pub fn render_index(query: &QueryService) -> String {
    let class_options = query
        .list_liquid_class_names()
        .iter()
        .map(|name| {
            let name = escape_html(name);
            format!("<option value=\"{name}\">{name}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let parameter_cards = Parameter::ALL
        .iter()
        .map(render_parameter_card)
        .collect::<Vec<_>>()
        .join("\n");

    let liquid_rows = liquid_views(&query.find_liquids(None))
        .iter()
        .map(render_liquid_row)
        .collect::<Vec<_>>()
        .join("\n");

    INDEX_TEMPLATE
        .replace("{{class_options}}", &class_options)
        .replace("{{parameter_cards}}", &parameter_cards)
        .replace("{{liquid_rows}}", &liquid_rows)
}

fn render_parameter_card(parameter: &Parameter) -> String {
    format!(
        "<div class=\"parameter-card\" data-param=\"{key}\" tabindex=\"0\">\
         <span class=\"param-name\">{name}:</span> \
         <span class=\"param-info\" id=\"info-{key}\"></span></div>",
        key = parameter.key(),
        name = parameter.display_name(),
    )
}

pub fn render_liquid_row(liquid: &LiquidView<'_>) -> String {
    format!(
        "<tr class=\"liquid-row\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(liquid.name),
        liquid.density,
        liquid.viscosity,
        escape_html(liquid.molar_weight.unwrap_or(NOT_APPLICABLE)),
        escape_html(liquid.liquid_class),
        escape_html(liquid.notes),
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
