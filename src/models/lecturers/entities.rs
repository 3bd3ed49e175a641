//! 讲师业务实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 讲师信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    /// 讲师ID
    pub id: i64,
    /// 姓名
    pub name: String,
    /// 邮箱
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}
