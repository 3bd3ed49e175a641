//! 学生业务实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 学生信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// 学生ID
    pub id: i64,
    /// 学号（自动分配，全局唯一，如 "001"）
    pub student_number: String,
    /// 姓名
    pub name: String,
    /// 邮箱
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 照片路径
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}
