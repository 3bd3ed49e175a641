//! 课程相关请求体

use serde::Deserialize;

/// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub course_code: String,
    pub course_name: String,
    pub semester: i32,
    pub lecturer_id: i64,
}

/// 更新课程请求，未提供的字段保持不变
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub semester: Option<i32>,
    pub lecturer_id: Option<i64>,
}

/// 课程列表查询参数
#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    /// 按学期过滤
    pub semester: Option<i32>,
    /// 按讲师过滤
    pub lecturer_id: Option<i64>,
}
