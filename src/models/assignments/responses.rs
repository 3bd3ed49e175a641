//! 作业相关响应体

use super::entities::{Assignment, AssignmentStatus};
use crate::models::students::entities::Student;
use crate::models::submissions::entities::SubmissionStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 作业列表项（附派生状态与提交数）
#[derive(Debug, Serialize)]
pub struct AssignmentListItem {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub course_code: String,
    pub course_name: String,
    pub submission_count: u64,
    pub status: AssignmentStatus,
}

/// 作业列表响应
#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub assignments: Vec<AssignmentListItem>,
    pub total: u64,
}

/// 单次提交在名单中的展示信息
#[derive(Debug, Serialize)]
pub struct RosterSubmission {
    pub submission_id: i64,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    pub status: SubmissionStatus,
}

/// 名单中的一行：学生及其提交情况（未提交则 submission 为空）
#[derive(Debug, Serialize)]
pub struct RosterEntry {
    pub student: Student,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<RosterSubmission>,
}

/// 作业提交名单响应：已交与未交学生分列
#[derive(Debug, Serialize)]
pub struct AssignmentRosterResponse {
    pub assignment: Assignment,
    pub submitted: Vec<RosterEntry>,
    pub not_submitted: Vec<Student>,
}
