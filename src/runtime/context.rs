//! 请求上下文
//!
//! 每个请求在边界处创建一个 `RequestContext`，显式传给每一次存储调用。
//! 上下文携带请求 ID 和绝对截止时间，存储调用超过截止时间即失败。

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::errors::{PortalError, Result};

#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
    deadline: Instant,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            request_id: request_id.into(),
            deadline: Instant::now() + timeout,
        }
    }

    /// 使用随机请求 ID 创建上下文
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), timeout)
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// 在截止时间内执行一次存储操作
    pub async fn run<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout_at(self.deadline, fut).await {
            Ok(result) => result,
            Err(_) => Err(PortalError::deadline_exceeded(format!(
                "{operation} exceeded the request deadline (request {})",
                self.request_id
            ))),
        }
    }
}
