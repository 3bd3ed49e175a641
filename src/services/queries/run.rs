use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::QueryService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn run_query(
    service: &QueryService,
    request: &HttpRequest,
    query_id: u32,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.run_canned_query(query_id).await {
        Ok(Some(result)) => {
            info!("Canned query {} executed, {} rows", query_id, result.rows.len());
            Ok(ApiResponse::success(result).json())
        }
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::QueryNotFound,
            "Query not found",
        )
        .not_found()),
        Err(e) => {
            error!("Canned query {} failed: {}", query_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to run query",
            )
            .internal_server_error())
        }
    }
}
