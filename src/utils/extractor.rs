//! 路径参数安全提取器
//!
//! 解析失败时直接返回统一格式的 400 响应，处理函数只需面对合法 ID。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> actix_web::Error {
    let response =
        ApiResponse::<serde_json::Value>::error(ErrorCode::BadRequest, message).bad_request();
    InternalError::from_response(message.to_string(), response).into()
}

macro_rules! define_id_extractor {
    ($name:ident, $param:literal) => {
        /// 从路径中提取并校验正整数 ID
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_request(concat!("Invalid ", $param, " in path"))),
                })
            }
        }
    };
}

define_id_extractor!(SafeStudentIdI64, "student_id");
define_id_extractor!(SafeLecturerIdI64, "lecturer_id");
define_id_extractor!(SafeCourseIdI64, "course_id");
define_id_extractor!(SafeAssignmentIdI64, "assignment_id");
define_id_extractor!(SafeSubmissionIdI64, "submission_id");

/// 从路径中提取预置查询编号
///
/// 非数字返回 400，数字但目录中不存在的编号由服务层回 404。
pub struct SafeQueryIdU32(pub u32);

impl FromRequest for SafeQueryIdU32 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("query_id")
            .and_then(|raw| raw.parse::<u32>().ok());

        ready(match parsed {
            Some(id) => Ok(SafeQueryIdU32(id)),
            None => Err(bad_request("Invalid query_id in path")),
        })
    }
}
