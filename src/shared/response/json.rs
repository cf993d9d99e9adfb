use crate::shared::response::render::Renderer;
use crate::shared::response::types::{Response, ResponseBody};
use serde::Serialize;

/// Compact JSON for the HTTP API.
pub struct JsonRenderer;

/// Indented JSON for terminal output.
pub struct PrettyJsonRenderer;

#[derive(Serialize)]
struct ErrorPayload<'a> {
    error: &'a str,
}

const FALLBACK: &[u8] = b"{\"error\":\"Failed to serialize JSON\"}";

impl Renderer for JsonRenderer {
    fn render(&self, response: &Response) -> Vec<u8> {
        let mut buf = Vec::with_capacity(estimate_json_size(response));

        let written = match &response.body {
            ResponseBody::Json(value) => sonic_rs::to_writer(&mut buf, value),
            ResponseBody::Error(message) => {
                sonic_rs::to_writer(&mut buf, &ErrorPayload { error: message })
            }
        };
        if written.is_err() {
            buf = FALLBACK.to_vec();
        }

        buf.push(b'\n');
        buf
    }
}

impl Renderer for PrettyJsonRenderer {
    fn render(&self, response: &Response) -> Vec<u8> {
        let rendered = match &response.body {
            ResponseBody::Json(value) => serde_json::to_vec_pretty(value),
            ResponseBody::Error(message) => {
                serde_json::to_vec_pretty(&ErrorPayload { error: message })
            }
        };
        let mut buf = rendered.unwrap_or_else(|_| FALLBACK.to_vec());
        buf.push(b'\n');
        buf
    }
}

fn estimate_json_size(response: &Response) -> usize {
    match &response.body {
        // Rough estimate: 160 bytes per record
        ResponseBody::Json(serde_json::Value::Array(items)) => 16 + items.len() * 160,
        ResponseBody::Json(_) => 1024,
        ResponseBody::Error(message) => 16 + message.len(),
    }
}
