use hyper::{Method, Request, Response, body::Incoming};
use std::{convert::Infallible, sync::Arc};
use tracing::debug;

use crate::frontend::context::FrontendContext;
use crate::shared::response::{JsonRenderer, Response as ResponseType, StatusCode};

use super::dispatcher::{get_liquid_class, list_liquid_classes, list_liquids, respond};
use super::static_files::{serve_asset, serve_index};

/// Resolved request target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Index,
    Asset(&'a str),
    LiquidClasses,
    Liquids,
    /// Raw, still percent-encoded class name.
    LiquidClass(&'a str),
    Unknown,
}

impl<'a> Route<'a> {
    pub fn parse(path: &'a str, ui_enabled: bool) -> Self {
        match path {
            "/" if ui_enabled => Route::Index,
            "/api/liquid-classes" => Route::LiquidClasses,
            "/api/liquids" => Route::Liquids,
            p => {
                if let Some(asset) = p.strip_prefix("/static/").filter(|_| ui_enabled) {
                    return Route::Asset(asset);
                }
                match p.strip_prefix("/api/liquid-class/") {
                    Some(name) if !name.is_empty() && !name.contains('/') => {
                        Route::LiquidClass(name)
                    }
                    _ => Route::Unknown,
                }
            }
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(
            self,
            Route::LiquidClasses | Route::Liquids | Route::LiquidClass(_)
        )
    }
}

pub struct HttpHandler {
    ctx: Arc<FrontendContext>,
}

impl HttpHandler {
    pub fn new(ctx: Arc<FrontendContext>) -> Self {
        Self { ctx }
    }

    fn error(status: StatusCode, message: &str) -> Response<String> {
        respond(&ResponseType::error(status, message), &JsonRenderer)
    }

    /// Answers a request from its method, path and raw query string.
    pub fn route(&self, method: &Method, path: &str, query: Option<&str>) -> Response<String> {
        let route = Route::parse(path, self.ctx.ui_enabled);

        if route == Route::Unknown {
            return Self::error(StatusCode::NotFound, "Not Found");
        }
        // hyper drops the body of HEAD responses
        if method != Method::GET && method != Method::HEAD {
            return Self::error(StatusCode::MethodNotAllowed, "Method Not Allowed");
        }
        // Static pages stay available while draining
        if route.is_api() && self.ctx.server_state.is_shutting_down() {
            return Self::error(StatusCode::ServiceUnavailable, "Server is shutting down");
        }

        let catalog = self.ctx.query.as_ref();
        match route {
            Route::Index => serve_index(catalog),
            Route::Asset(name) => serve_asset(name),
            Route::LiquidClasses => respond(&list_liquid_classes(catalog), &JsonRenderer),
            Route::Liquids => respond(&list_liquids(catalog, query), &JsonRenderer),
            Route::LiquidClass(name) => respond(&get_liquid_class(catalog, name), &JsonRenderer),
            Route::Unknown => Self::error(StatusCode::NotFound, "Not Found"),
        }
    }

    async fn handle(&self, req: Request<Incoming>) -> Result<Response<String>, Infallible> {
        let response = self.route(req.method(), req.uri().path(), req.uri().query());
        debug!(
            target: "liquid_catalog::http",
            method = %req.method(),
            path = req.uri().path(),
            status = response.status().as_u16(),
            "Handled request"
        );
        Ok(response)
    }
}

pub async fn handle_request(
    req: Request<Incoming>,
    ctx: Arc<FrontendContext>,
) -> Result<Response<String>, Infallible> {
    let handler = HttpHandler::new(ctx);
    handler.handle(req).await
}
