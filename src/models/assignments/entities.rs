//! 作业业务实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 作业信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// 作业ID
    pub id: i64,
    /// 所属课程ID
    pub course_id: i64,
    /// 标题
    pub title: String,
    /// 描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 截止时间
    pub due_at: DateTime<Utc>,
    /// 满分
    pub max_score: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 作业派生状态，由截止时间与提交数实时计算，不入库
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    /// 已过截止时间且无任何提交
    #[serde(rename = "Missing")]
    Missing,
    /// 未到截止时间且无提交
    #[serde(rename = "No Submission Yet")]
    NoSubmissionYet,
    /// 已有提交
    #[serde(rename = "Has Submissions")]
    HasSubmissions,
}

impl AssignmentStatus {
    /// 根据提交数与截止时间推导状态
    pub fn derive(submission_count: u64, due_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if submission_count > 0 {
            AssignmentStatus::HasSubmissions
        } else if now > due_at {
            AssignmentStatus::Missing
        } else {
            AssignmentStatus::NoSubmissionYet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn past_due_without_submissions_is_missing() {
        assert_eq!(
            AssignmentStatus::derive(0, ts(1000), ts(2000)),
            AssignmentStatus::Missing
        );
    }

    #[test]
    fn before_due_without_submissions_is_pending() {
        assert_eq!(
            AssignmentStatus::derive(0, ts(2000), ts(1000)),
            AssignmentStatus::NoSubmissionYet
        );
    }

    #[test]
    fn any_submission_wins_regardless_of_due() {
        assert_eq!(
            AssignmentStatus::derive(3, ts(1000), ts(2000)),
            AssignmentStatus::HasSubmissions
        );
        assert_eq!(
            AssignmentStatus::derive(1, ts(2000), ts(1000)),
            AssignmentStatus::HasSubmissions
        );
    }

    #[test]
    fn status_serializes_to_display_labels() {
        assert_eq!(
            serde_json::to_value(AssignmentStatus::NoSubmissionYet).unwrap(),
            "No Submission Yet"
        );
        assert_eq!(
            serde_json::to_value(AssignmentStatus::Missing).unwrap(),
            "Missing"
        );
    }
}
