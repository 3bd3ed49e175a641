//! 课程业务实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::Assignment;

/// 课程信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// 课程ID
    pub id: i64,
    /// 课程代码（如 "CS101"）
    pub course_code: String,
    /// 课程名称
    pub course_name: String,
    /// 学期序号
    pub semester: i32,
    /// 授课讲师ID
    pub lecturer_id: i64,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 课程详情（含讲师姓名与按截止时间排序的作业列表）
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub lecturer_name: String,
    pub assignments: Vec<Assignment>,
}
