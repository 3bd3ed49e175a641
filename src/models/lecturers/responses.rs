//! 讲师相关响应体

use super::entities::Lecturer;
use serde::Serialize;

/// 讲师列表响应
#[derive(Debug, Serialize)]
pub struct LecturerListResponse {
    pub lecturers: Vec<Lecturer>,
    pub total: u64,
}
