//! 业务错误码定义
//!
//! 响应信封中的 code 字段取值。0 表示成功，其余按错误类别划分区间：
//! 1xxx 请求错误，2xxx 资源不存在，5xxx 服务器内部错误。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    /// 成功
    Success = 0,

    /// 请求参数错误
    BadRequest = 1000,
    /// 数据校验失败
    ValidationFailed = 1001,
    /// 唯一约束冲突（如学号重复）
    DuplicateEntry = 1002,
    /// 外键引用的资源不存在
    InvalidReference = 1003,

    /// 资源不存在
    NotFound = 2000,
    /// 学生不存在
    StudentNotFound = 2001,
    /// 讲师不存在
    LecturerNotFound = 2002,
    /// 课程不存在
    CourseNotFound = 2003,
    /// 作业不存在
    AssignmentNotFound = 2004,
    /// 提交记录不存在
    SubmissionNotFound = 2005,
    /// 预置查询不存在
    QueryNotFound = 2006,

    /// 服务器内部错误
    InternalServerError = 5000,
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code as i32
    }
}
