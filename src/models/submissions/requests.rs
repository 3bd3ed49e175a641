//! 提交相关请求体

use serde::Deserialize;

/// 创建提交请求
#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    pub student_id: i64,
    /// 提交时间（秒级时间戳），缺省为当前时间
    pub submitted_at: Option<i64>,
    pub file_path: String,
    pub score: Option<i32>,
    pub remark: Option<String>,
}

/// 更新提交请求，未提供的字段保持不变
#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionRequest {
    pub submitted_at: Option<i64>,
    pub file_path: Option<String>,
    pub score: Option<i32>,
    pub remark: Option<String>,
}

/// 提交列表查询参数
#[derive(Debug, Deserialize)]
pub struct SubmissionListQuery {
    /// 按作业过滤
    pub assignment_id: Option<i64>,
    /// 按学生过滤
    pub student_id: Option<i64>,
    /// 按课程过滤
    pub course_id: Option<i64>,
}
