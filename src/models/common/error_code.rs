use serde::Serialize;

/// 响应体中的业务错误码
///
/// 与 HTTP 状态码一一对应的粗粒度分类，调用方应依据错误码而不是消息文本分支。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误
    BadRequest = 1000,
    InvalidInput = 1001,

    // 认证与授权
    Unauthorized = 2000,
    Forbidden = 2001,

    // 资源
    NotFound = 3000,

    // 服务器错误
    InternalServerError = 5000,
}
