//! 课程相关响应体

use super::entities::Course;
use serde::Serialize;

/// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
    pub total: u64,
}
