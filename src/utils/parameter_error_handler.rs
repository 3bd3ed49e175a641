//! 请求参数解析错误处理
//!
//! actix 默认的反序列化错误是纯文本，这里统一改写为响应信封。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::HttpRequest;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败时的错误响应
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid JSON body: {err}");
    let response =
        ApiResponse::<serde_json::Value>::error(ErrorCode::BadRequest, &message).bad_request();
    InternalError::from_response(message, response).into()
}

/// 查询字符串解析失败时的错误响应
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid query parameters: {err}");
    let response =
        ApiResponse::<serde_json::Value>::error(ErrorCode::BadRequest, &message).bad_request();
    InternalError::from_response(message, response).into()
}
