//! 提交业务实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 提交记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// 提交ID
    pub id: i64,
    /// 作业ID
    pub assignment_id: i64,
    /// 学生ID
    pub student_id: i64,
    /// 提交时间
    pub submitted_at: DateTime<Utc>,
    /// 提交文件路径
    pub file_path: String,
    /// 得分（未评分时为空）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    /// 评语
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 提交派生状态，由提交时间与截止时间实时计算，不入库
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// 截止后提交
    #[serde(rename = "Late")]
    Late,
    /// 截止前（含截止时刻）提交
    #[serde(rename = "On Time")]
    OnTime,
    /// 无法判定（无对应作业截止时间）
    #[serde(rename = "-")]
    NotAvailable,
}

impl SubmissionStatus {
    /// 根据提交时间与截止时间推导状态
    pub fn derive(submitted_at: DateTime<Utc>, due_at: Option<DateTime<Utc>>) -> Self {
        match due_at {
            Some(due) if submitted_at > due => SubmissionStatus::Late,
            Some(_) => SubmissionStatus::OnTime,
            None => SubmissionStatus::NotAvailable,
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
    fn after_due_is_late() {
        assert_eq!(
            SubmissionStatus::derive(ts(2001), Some(ts(2000))),
            SubmissionStatus::Late
        );
    }

    #[test]
    fn at_or_before_due_is_on_time() {
        assert_eq!(
            SubmissionStatus::derive(ts(2000), Some(ts(2000))),
            SubmissionStatus::OnTime
        );
        assert_eq!(
            SubmissionStatus::derive(ts(1500), Some(ts(2000))),
            SubmissionStatus::OnTime
        );
    }

    #[test]
    fn missing_due_is_not_available() {
        assert_eq!(
            SubmissionStatus::derive(ts(2000), None),
            SubmissionStatus::NotAvailable
        );
    }

    #[test]
    fn status_serializes_to_display_labels() {
        assert_eq!(serde_json::to_value(SubmissionStatus::Late).unwrap(), "Late");
        assert_eq!(
            serde_json::to_value(SubmissionStatus::OnTime).unwrap(),
            "On Time"
        );
        assert_eq!(
            serde_json::to_value(SubmissionStatus::NotAvailable).unwrap(),
            "-"
        );
    }
}
