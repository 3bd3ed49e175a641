//! 学生相关响应体

use super::entities::Student;
use serde::Serialize;

/// 学生列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
    pub total: u64,
}
