/*!
 * 请求上下文中间件
 *
 * 为每个请求建立 `RequestContext`（请求 ID + 截止时间）并存入请求扩展，
 * 处理程序通过 `RequestContext` 提取器取得同一个上下文。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * App::new()
 *     .wrap(RequestContextLayer::new(Duration::from_secs(10)))
 * ```
 *
 * 客户端传入的 `X-Request-Id` 会被沿用（仅限可见 ASCII 且不超过 64 字节），
 * 否则生成 UUID。响应头回写同一个请求 ID。
 */

use crate::runtime::RequestContext;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, time::Duration};
use tracing::{debug, info};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 64;

#[derive(Clone)]
pub struct RequestContextLayer {
    deadline: Duration,
}

impl RequestContextLayer {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }
}

// 辅助函数：沿用客户端提供的请求 ID
fn incoming_request_id(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
        .map(str::to_string)
}

impl<S, B> Transform<S, ServiceRequest> for RequestContextLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestContextMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestContextMiddleware {
            service: Rc::new(service),
            deadline: self.deadline,
        }))
    }
}

pub struct RequestContextMiddleware<S> {
    service: Rc<S>,
    deadline: Duration,
}

impl<S, B> Service<ServiceRequest> for RequestContextMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let deadline = self.deadline;

        Box::pin(async move {
            let context = match incoming_request_id(&req) {
                Some(id) => RequestContext::new(id, deadline),
                None => RequestContext::with_timeout(deadline),
            };
            let request_id = context.request_id().to_string();
            let method = req.method().clone();
            let path = req.path().to_string();
            let started = std::time::Instant::now();

            debug!(request_id = %request_id, %method, %path, "request started");
            req.extensions_mut().insert(context);

            let mut res = srv.call(req).await?;

            info!(
                request_id = %request_id,
                %method,
                %path,
                status = res.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request finished"
            );

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}
