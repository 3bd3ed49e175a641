use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.delete_assignment(assignment_id).await {
        Ok(true) => {
            info!("Assignment deleted: id={}", assignment_id);
            Ok(ApiResponse::success_empty("Assignment deleted").json())
        }
        Ok(false) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to delete assignment {}: {}", assignment_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to delete assignment",
            )
            .internal_server_error())
        }
    }
}
