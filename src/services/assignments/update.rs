use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::errors::TrackerError;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    update_data: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_update(&update_data) {
        return Ok(
            ApiResponse::<serde_json::Value>::error(ErrorCode::ValidationFailed, message)
                .bad_request(),
        );
    }

    let storage = service.get_storage(request);
    match storage.update_assignment(assignment_id, update_data).await {
        Ok(Some(assignment)) => {
            info!("Assignment updated: id={}", assignment.id);
            Ok(ApiResponse::success(assignment).json())
        }
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        )
        .not_found()),
        Err(TrackerError::Validation(message)) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::InvalidReference,
            message,
        )
        .bad_request()),
        Err(e) => {
            error!("Failed to update assignment {}: {}", assignment_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to update assignment",
            )
            .internal_server_error())
        }
    }
}

fn validate_update(data: &UpdateAssignmentRequest) -> Result<(), &'static str> {
    if let Some(title) = data.title.as_deref() {
        if title.trim().is_empty() {
            return Err("title must not be empty");
        }
    }
    if let Some(due_at) = data.due_at {
        if due_at <= 0 {
            return Err("due_at must be a positive timestamp");
        }
    }
    if let Some(max_score) = data.max_score {
        if max_score < 1 {
            return Err("max_score must be a positive number");
        }
    }
    Ok(())
}
