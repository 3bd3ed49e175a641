//! 学生相关请求体

use serde::Deserialize;

/// 创建学生请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    /// 学号，缺省时由服务端按当前最大学号自动分配
    pub student_number: Option<String>,
    pub email: Option<String>,
    pub photo_path: Option<String>,
}

/// 更新学生请求，未提供的字段保持不变
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo_path: Option<String>,
}

/// 学生列表查询参数
#[derive(Debug, Deserialize)]
pub struct StudentListQuery {
    /// 按姓名或学号模糊搜索
    pub search: Option<String>,
}
