//! 数据模型定义
//!
//! 按业务域组织：每个域下分 entities（业务实体）、requests（请求体）、
//! responses（响应体）三类。common 存放统一响应信封与错误码。

pub mod common;

pub mod assignments;
pub mod courses;
pub mod dashboard;
pub mod lecturers;
pub mod queries;
pub mod reports;
pub mod students;
pub mod submissions;

pub use common::{ApiResponse, AppStartTime, ErrorCode};
