//! 报表相关请求体

use serde::Deserialize;

/// 排序方向，仅 "desc" 表示降序，其余取值一律按升序处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        })
    }
}

/// 按分数排序的查询参数
#[derive(Debug, Deserialize)]
pub struct SortedSubmissionsQuery {
    #[serde(default)]
    pub order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_order_defaults_to_ascending() {
        let query: SortedSubmissionsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn only_desc_selects_descending() {
        let query: SortedSubmissionsQuery =
            serde_json::from_str(r#"{"order":"desc"}"#).unwrap();
        assert_eq!(query.order, SortOrder::Desc);
    }

    #[test]
    fn unrecognized_order_values_fall_back_to_ascending() {
        for body in [r#"{"order":"DESC"}"#, r#"{"order":"score"}"#, r#"{"order":""}"#] {
            let query: SortedSubmissionsQuery = serde_json::from_str(body).unwrap();
            assert_eq!(query.order, SortOrder::Asc);
        }
    }
}
