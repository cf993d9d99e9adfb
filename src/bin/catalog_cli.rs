use anyhow::bail;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use liquid_catalog::catalog::view::liquid_views;
use liquid_catalog::catalog::{Catalog, LiquidClassView, QueryService};
use liquid_catalog::shared::response::{PrettyJsonRenderer, Renderer, Response};

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Look up liquids and liquid-class pipetting settings", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every liquid class name
    Classes,
    /// List liquids, optionally only those of one class
    Liquids {
        #[arg(short, long)]
        class: Option<String>,
    },
    /// Show the full settings of one liquid class
    Class { name: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let query = QueryService::new(Catalog::initialize()?);

    let response = match &args.command {
        Command::Classes => Response::ok(&query.list_liquid_class_names()),
        Command::Liquids { class } => {
            Response::ok(&liquid_views(&query.find_liquids(class.as_deref())))
        }
        Command::Class { name } => match query.find_liquid_class(name) {
            Ok(class) => Response::ok(&LiquidClassView::from(class)),
            Err(e) => bail!(e),
        },
    };

    if !response.is_ok() {
        bail!("{}", response.status);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&PrettyJsonRenderer.render(&response))?;
    stdout.flush()?;
    Ok(())
}
