//! 请求提取器
//!
//! 路径 ID 和调用者 ID 在这里解析为强类型，之后各层不再处理字符串。

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::config::AppConfig;
use crate::errors::PortalError;
use crate::models::{CourseId, GradeId, UserId};
use crate::runtime::RequestContext;

pub const USER_ID_HEADER: &str = "x-user-id";

/// 调用者 ID，来自 `X-User-Id` 请求头
#[derive(Debug, Clone, Copy)]
pub struct CallerId(pub UserId);

impl FromRequest for CallerId {
    type Error = PortalError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.headers().get(USER_ID_HEADER) {
            None => Err(PortalError::unauthenticated("missing X-User-Id header")),
            Some(value) => value
                .to_str()
                .ok()
                .and_then(UserId::parse)
                .map(CallerId)
                .ok_or_else(|| PortalError::unauthenticated("invalid X-User-Id header")),
        };
        ready(result)
    }
}

macro_rules! define_safe_path_ids {
    ($($name:ident($id:ty, $param:literal)),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name(pub $id);

            impl FromRequest for $name {
                type Error = PortalError;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    let result = req
                        .match_info()
                        .get($param)
                        .and_then(<$id>::parse)
                        .map($name)
                        .ok_or_else(|| {
                            PortalError::invalid_input(concat!("invalid ", $param))
                        });
                    ready(result)
                }
            }
        )*
    };
}

define_safe_path_ids! {
    SafeCourseId(CourseId, "course_id"),
    SafeGradeId(GradeId, "grade_id"),
}

/// 中间件建立的请求上下文；未经过中间件时按配置的截止时长新建
impl FromRequest for RequestContext {
    type Error = PortalError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let context = req
            .extensions()
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| RequestContext::with_timeout(AppConfig::get().request_deadline()));
        ready(Ok(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_caller_id_from_header() {
        let (req, mut payload) = TestRequest::default()
            .insert_header((USER_ID_HEADER, "9"))
            .to_http_parts();
        let caller = CallerId::from_request(&req, &mut payload).await.unwrap();
        assert_eq!(caller.0, UserId(9));
    }

    #[actix_web::test]
    async fn test_caller_id_missing_or_invalid() {
        for header in [None, Some("abc"), Some("0"), Some("-3")] {
            let mut builder = TestRequest::default();
            if let Some(value) = header {
                builder = builder.insert_header((USER_ID_HEADER, value));
            }
            let (req, mut payload) = builder.to_http_parts();
            let err = CallerId::from_request(&req, &mut payload).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        }
    }

    #[actix_web::test]
    async fn test_path_id_parsing() {
        let (req, mut payload) = TestRequest::default()
            .param("course_id", "42")
            .to_http_parts();
        let id = SafeCourseId::from_request(&req, &mut payload).await.unwrap();
        assert_eq!(id.0, CourseId(42));

        let (req, mut payload) = TestRequest::default()
            .param("grade_id", "x1")
            .to_http_parts();
        let err = SafeGradeId::from_request(&req, &mut payload)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
