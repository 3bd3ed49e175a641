//! 讲师相关请求体

use serde::Deserialize;

/// 创建讲师请求
#[derive(Debug, Deserialize)]
pub struct CreateLecturerRequest {
    pub name: String,
    pub email: Option<String>,
}

/// 更新讲师请求，未提供的字段保持不变
#[derive(Debug, Deserialize)]
pub struct UpdateLecturerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}
