use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.get_assignment(assignment_id).await {
        Ok(Some(assignment)) => Ok(ApiResponse::success(assignment).json()),
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to get assignment {}: {}", assignment_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get assignment",
            )
            .internal_server_error())
        }
    }
}
