use hyper::{Response, StatusCode};

use crate::catalog::QueryService;
use crate::frontend::http::page::render_index;
use crate::frontend::http::reply;

// Serve the server-rendered index page
pub fn serve_index(query: &QueryService) -> Response<String> {
    reply(
        StatusCode::OK,
        "text/html; charset=utf-8",
        render_index(query),
    )
}

// Serve files from the embedded ./static directory by simple name matching
pub fn serve_asset(path: &str) -> Response<String> {
    match path {
        "app.js" => reply(
            StatusCode::OK,
            "application/javascript; charset=utf-8",
            include_str!("static/app.js").to_string(),
        ),
        "styles.css" => reply(
            StatusCode::OK,
            "text/css; charset=utf-8",
            include_str!("static/styles.css").to_string(),
        ),
        _ => reply(
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            "Not Found".to_string(),
        ),
    }
}
