use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QueryService;
use crate::models::queries::responses::{CannedQueryCatalog, CannedQueryInfo};
use crate::models::ApiResponse;
use crate::storage::canned::CANNED_QUERIES;

/// 目录是编译期常量，不经过存储层
pub async fn list_queries(
    _service: &QueryService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let queries = CANNED_QUERIES
        .iter()
        .map(|query| CannedQueryInfo {
            id: query.id,
            title: query.title.to_string(),
        })
        .collect();
    Ok(ApiResponse::success(CannedQueryCatalog { queries }).json())
}
