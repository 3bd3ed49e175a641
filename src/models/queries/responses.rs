//! 预置查询响应体

use serde::Serialize;

/// 预置查询目录项
#[derive(Debug, Serialize)]
pub struct CannedQueryInfo {
    pub id: u32,
    pub title: String,
}

/// 预置查询目录响应
#[derive(Debug, Serialize)]
pub struct CannedQueryCatalog {
    pub queries: Vec<CannedQueryInfo>,
}

/// 预置查询执行结果
#[derive(Debug, Serialize)]
pub struct CannedQueryResult {
    pub id: u32,
    pub title: String,
    /// 结果列名，与每行值一一对应
    pub columns: Vec<String>,
    /// 结果行，值为 JSON 标量
    pub rows: Vec<Vec<serde_json::Value>>,
}
