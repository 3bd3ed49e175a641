//! 报表相关响应体

use crate::models::assignments::entities::Assignment;
use crate::models::submissions::responses::SubmissionListItem;
use serde::Serialize;

/// 全局平均分报表
#[derive(Debug, Serialize)]
pub struct AverageScoreReport {
    /// 已评分提交的平均分，无评分时为空
    pub average: Option<f64>,
    /// 参与计算的提交数
    pub graded_count: u64,
}

/// 单个课程的平均分
#[derive(Debug, Serialize)]
pub struct CourseAverageRow {
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub average: Option<f64>,
}

/// 无提交作业报表中的一行
#[derive(Debug, Serialize)]
pub struct AssignmentWithoutSubmissions {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub course_code: String,
    pub course_name: String,
}

/// 无提交作业报表：列表与计数
#[derive(Debug, Serialize)]
pub struct AssignmentsWithoutSubmissionsReport {
    pub assignments: Vec<AssignmentWithoutSubmissions>,
    pub total: u64,
}

/// 每个学生的提交数
#[derive(Debug, Serialize)]
pub struct StudentSubmissionCountRow {
    pub student_id: i64,
    pub student_number: String,
    pub student_name: String,
    pub submission_count: u64,
}

/// 每个作业的提交数
#[derive(Debug, Serialize)]
pub struct AssignmentSubmissionCountRow {
    pub assignment_id: i64,
    pub title: String,
    pub course_code: String,
    pub submission_count: u64,
}

/// 提交明细类报表共用的响应
#[derive(Debug, Serialize)]
pub struct SubmissionReport {
    pub submissions: Vec<SubmissionListItem>,
    pub total: u64,
}
