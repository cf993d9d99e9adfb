use hyper::Response;
use tracing::debug;

use crate::catalog::view::liquid_views;
use crate::catalog::{LiquidClassView, QueryService};
use crate::frontend::http::query_string::{percent_decode, query_param};
use crate::frontend::http::reply;
use crate::shared::response::{Renderer, Response as ResponseType, StatusCode};

pub const CLASS_NOT_FOUND: &str = "Liquid class not found";

/// `GET /api/liquid-classes`
pub fn list_liquid_classes(query: &QueryService) -> ResponseType {
    ResponseType::ok(&query.list_liquid_class_names())
}

/// `GET /api/liquids[?liquid_class=NAME]`
pub fn list_liquids(query: &QueryService, raw_query: Option<&str>) -> ResponseType {
    match query_param(raw_query, "liquid_class") {
        Ok(filter) => {
            let liquids = query.find_liquids(filter.as_deref());
            debug!(
                target: "liquid_catalog::http",
                filter = filter.as_deref().unwrap_or(""),
                matched = liquids.len(),
                "Listing liquids"
            );
            ResponseType::ok(&liquid_views(&liquids))
        }
        Err(e) => ResponseType::error(StatusCode::BadRequest, e),
    }
}

/// `GET /api/liquid-class/{name}` where `encoded_name` is the raw path segment.
pub fn get_liquid_class(query: &QueryService, encoded_name: &str) -> ResponseType {
    let name = match percent_decode(encoded_name, false) {
        Ok(name) => name,
        Err(e) => return ResponseType::error(StatusCode::BadRequest, e),
    };

    match query.find_liquid_class(&name) {
        Ok(class) => ResponseType::ok(&LiquidClassView::from(class)),
        Err(e) if e.is_not_found() => ResponseType::error(StatusCode::NotFound, CLASS_NOT_FOUND),
        Err(e) => ResponseType::error(StatusCode::InternalError, e),
    }
}

pub fn respond(response: &ResponseType, renderer: &dyn Renderer) -> Response<String> {
    let body = renderer.render(response);
    reply(
        response.status.into(),
        renderer.content_type(),
        String::from_utf8_lossy(&body).into_owned(),
    )
}
