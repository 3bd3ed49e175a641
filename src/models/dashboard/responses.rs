//! 仪表盘与总览响应体

use crate::models::assignments::entities::Assignment;
use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;
use crate::models::submissions::entities::SubmissionStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 仪表盘中单个作业的概要
#[derive(Debug, Serialize)]
pub struct DashboardAssignment {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub course_code: String,
    pub course_name: String,
    pub submission_count: u64,
}

/// 仪表盘响应：按状态分组的作业与各实体计数
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// 已过截止时间且无提交
    pub missing: Vec<DashboardAssignment>,
    /// 未到截止时间且无提交
    pub upcoming: Vec<DashboardAssignment>,
    /// 已有提交
    pub submitted: Vec<DashboardAssignment>,
    pub student_count: u64,
    pub course_count: u64,
    pub assignment_count: u64,
    pub submission_count: u64,
}

/// 系统总览响应：各实体计数与系统说明
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub description: String,
    pub student_count: u64,
    pub lecturer_count: u64,
    pub course_count: u64,
    pub assignment_count: u64,
    pub submission_count: u64,
}

/// 成绩单中的一行
#[derive(Debug, Serialize)]
pub struct TranscriptEntry {
    pub student_number: String,
    pub student_name: String,
    pub course_code: String,
    pub course_name: String,
    pub assignment_title: String,
    pub max_score: i32,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    pub status: SubmissionStatus,
}

/// 全量成绩单响应
#[derive(Debug, Serialize)]
pub struct TranscriptListResponse {
    pub entries: Vec<TranscriptEntry>,
    pub total: u64,
}

/// 单个课程的成绩单响应
#[derive(Debug, Serialize)]
pub struct CourseTranscriptResponse {
    pub course: Course,
    pub entries: Vec<TranscriptEntry>,
    pub total: u64,
}

/// 学生成绩单响应
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub student: Student,
    pub entries: Vec<TranscriptEntry>,
    /// 已评分提交的平均分
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
}
