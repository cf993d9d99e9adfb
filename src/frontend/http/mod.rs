pub mod dispatcher;
pub mod handler;
pub mod listener;
pub mod page;
pub mod query_string;
pub mod static_files;

use hyper::Response;
use hyper::header::{CONTENT_TYPE, HeaderValue};

pub(crate) fn reply(
    status: hyper::StatusCode,
    content_type: &'static str,
    body: String,
) -> Response<String> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

#[cfg(test)]
mod query_string_test;
