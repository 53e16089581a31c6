//! 延迟解码的请求体
//!
//! 路由只做 JSON 语法解析，字段类型在权限检查之后才解码，
//! 这样无权限的调用者总是得到 403 而不是 400。

use serde::de::DeserializeOwned;

use crate::errors::{PortalError, Result};

#[derive(Debug, Clone)]
pub enum Payload<T> {
    // 已经是强类型的请求（服务内部调用、测试）
    Typed(T),
    // 来自 HTTP 的原始 JSON
    Raw(serde_json::Value),
}

impl<T: DeserializeOwned> Payload<T> {
    pub fn decode(self) -> Result<T> {
        match self {
            Payload::Typed(request) => Ok(request),
            Payload::Raw(raw) => serde_json::from_value(raw)
                .map_err(|e| PortalError::invalid_input(format!("invalid request body: {e}"))),
        }
    }
}

impl<T> From<T> for Payload<T> {
    fn from(request: T) -> Self {
        Payload::Typed(request)
    }
}
