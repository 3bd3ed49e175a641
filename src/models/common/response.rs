//! 统一响应格式

use super::error_code::ErrorCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// 所有接口共用的响应信封
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    /// 业务状态码，0 表示成功
    pub code: i32,
    /// 提示信息
    pub message: String,
    /// 业务数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 响应时间戳（毫秒）
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(code: ErrorCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// 成功响应（带数据）
    pub fn success(data: T) -> Self {
        Self::new(ErrorCode::Success, "success", Some(data))
    }

    /// 成功响应（带数据和自定义消息）
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self::new(ErrorCode::Success, message, Some(data))
    }

    /// 错误响应
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code, message, None)
    }

    /// 转换为 HTTP 200 响应（业务状态由 code 字段表达）
    pub fn json(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }

    /// 转换为指定状态码的 HTTP 响应
    pub fn with_status(self, status: actix_web::http::StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }

    /// 400 Bad Request
    pub fn bad_request(self) -> HttpResponse {
        HttpResponse::BadRequest().json(self)
    }

    /// 404 Not Found
    pub fn not_found(self) -> HttpResponse {
        HttpResponse::NotFound().json(self)
    }

    /// 409 Conflict
    pub fn conflict(self) -> HttpResponse {
        HttpResponse::Conflict().json(self)
    }

    /// 500 Internal Server Error
    pub fn internal_server_error(self) -> HttpResponse {
        HttpResponse::InternalServerError().json(self)
    }
}

impl ApiResponse<serde_json::Value> {
    /// 无数据的成功响应
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Success, message, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_zero_code() {
        let resp = ApiResponse::success(42);
        assert_eq!(resp.code, 0);
        assert_eq!(resp.message, "success");
        assert_eq!(resp.data, Some(42));
    }

    #[test]
    fn error_envelope_skips_data() {
        let resp: ApiResponse<serde_json::Value> =
            ApiResponse::error(ErrorCode::QueryNotFound, "Query not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 2006);
        assert_eq!(json["message"], "Query not found");
        assert!(json.get("data").is_none());
    }
}
