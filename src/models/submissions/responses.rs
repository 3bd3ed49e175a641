//! 提交相关响应体

use super::entities::{Submission, SubmissionStatus};
use serde::Serialize;

/// 提交列表项（带关联上下文与派生状态）
#[derive(Debug, Serialize)]
pub struct SubmissionListItem {
    #[serde(flatten)]
    pub submission: Submission,
    pub student_number: String,
    pub student_name: String,
    pub assignment_title: String,
    pub course_code: String,
    pub status: SubmissionStatus,
}

/// 提交列表响应
#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<SubmissionListItem>,
    pub total: u64,
}
