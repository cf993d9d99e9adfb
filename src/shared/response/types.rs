use serde_json::Value;
use std::fmt;

/// HTTP-style status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    ServiceUnavailable,
    InternalError,
}

impl StatusCode {
    pub fn code(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::ServiceUnavailable => 503,
            StatusCode::InternalError => 500,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::ServiceUnavailable => "Service Unavailable",
            StatusCode::InternalError => "Internal Error",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}

impl From<StatusCode> for hyper::StatusCode {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::Ok => hyper::StatusCode::OK,
            StatusCode::BadRequest => hyper::StatusCode::BAD_REQUEST,
            StatusCode::NotFound => hyper::StatusCode::NOT_FOUND,
            StatusCode::MethodNotAllowed => hyper::StatusCode::METHOD_NOT_ALLOWED,
            StatusCode::ServiceUnavailable => hyper::StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::InternalError => hyper::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Successful payload, rendered as-is.
    Json(Value),
    /// Error message, rendered as `{"error": ...}`.
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl Response {
    pub fn ok_json(value: Value) -> Self {
        Self {
            status: StatusCode::Ok,
            body: ResponseBody::Json(value),
        }
    }

    /// Serializes `payload` into an OK response, or an internal error if the
    /// payload cannot be represented as JSON.
    pub fn ok<T: serde::Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => Self::ok_json(value),
            Err(e) => Self::error(StatusCode::InternalError, format!("Serialization error: {e}")),
        }
    }

    pub fn error(code: StatusCode, message: impl ToString) -> Self {
        Self {
            status: code,
            body: ResponseBody::Error(message.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::Ok
    }
}
