//! 作业相关请求体

use serde::Deserialize;

/// 创建作业请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// 截止时间（秒级时间戳）
    pub due_at: i64,
    /// 满分，缺省 100
    pub max_score: Option<i32>,
}

/// 更新作业请求，未提供的字段保持不变
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub course_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_at: Option<i64>,
    pub max_score: Option<i32>,
}

/// 作业列表查询参数
#[derive(Debug, Deserialize)]
pub struct AssignmentListQuery {
    /// 按课程过滤
    pub course_id: Option<i64>,
}
