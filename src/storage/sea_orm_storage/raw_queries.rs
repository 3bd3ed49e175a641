//! 预置查询执行

use sea_orm::{ConnectionTrait, QueryResult, Statement};

use super::SeaOrmStorage;
use crate::errors::{Result, TrackerError};
use crate::models::queries::responses::CannedQueryResult;
use crate::storage::canned::find_canned_query;

/// 按列位置取值并转为 JSON 标量
///
/// 结果列类型不在编译期已知，按整数、浮点、文本依次尝试，全部失败视为 NULL。
fn value_at(row: &QueryResult, index: usize) -> serde_json::Value {
    if let Ok(Some(v)) = row.try_get_by_index::<Option<i64>>(index) {
        return serde_json::Value::from(v);
    }
    if let Ok(Some(v)) = row.try_get_by_index::<Option<f64>>(index) {
        return serde_json::Value::from(v);
    }
    if let Ok(Some(v)) = row.try_get_by_index::<Option<String>>(index) {
        return serde_json::Value::from(v);
    }
    serde_json::Value::Null
}

impl SeaOrmStorage {
    /// 执行目录中的预置查询，编号不存在时返回 None
    pub(super) async fn run_canned_query_impl(
        &self,
        id: u32,
    ) -> Result<Option<CannedQueryResult>> {
        let Some(query) = find_canned_query(id) else {
            return Ok(None);
        };

        let statement =
            Statement::from_string(self.conn().get_database_backend(), query.sql.to_string());
        let rows = self
            .conn()
            .query_all_raw(statement)
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        let values = rows
            .iter()
            .map(|row| {
                (0..query.columns.len())
                    .map(|index| value_at(row, index))
                    .collect()
            })
            .collect();

        Ok(Some(CannedQueryResult {
            id: query.id,
            title: query.title.to_string(),
            columns: query.columns.iter().map(|c| c.to_string()).collect(),
            rows: values,
        }))
    }
}
