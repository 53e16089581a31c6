//! JSON / 查询参数解析失败时统一返回 `InvalidInput` 信封

use actix_web::{
    Error, HttpRequest,
    error::{JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::errors::PortalError;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!(path = req.path(), "invalid JSON payload: {err}");
    let message = match &err {
        JsonPayloadError::ContentType => "content type must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "request body is too large".to_string()
        }
        other => format!("invalid JSON body: {other}"),
    };
    PortalError::invalid_input(message).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!(path = req.path(), "invalid query string: {err}");
    PortalError::invalid_input(format!("invalid query parameters: {err}")).into()
}
