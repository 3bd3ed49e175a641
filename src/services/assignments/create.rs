use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::errors::TrackerError;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_required;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_assignment_data(&assignment_data) {
        return Ok(
            ApiResponse::<serde_json::Value>::error(ErrorCode::ValidationFailed, message)
                .bad_request(),
        );
    }

    let storage = service.get_storage(request);
    match storage.create_assignment(assignment_data).await {
        Ok(assignment) => {
            info!("Assignment created: id={}", assignment.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment)))
        }
        Err(TrackerError::Validation(message)) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::InvalidReference,
            message,
        )
        .bad_request()),
        Err(e) => {
            error!("Assignment creation failed: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to create assignment",
            )
            .internal_server_error())
        }
    }
}

fn validate_assignment_data(data: &CreateAssignmentRequest) -> Result<(), &'static str> {
    validate_required(&data.title, "title is required")?;
    if data.due_at <= 0 {
        return Err("due_at must be a positive timestamp");
    }
    if let Some(max_score) = data.max_score {
        if max_score < 1 {
            return Err("max_score must be a positive number");
        }
    }
    Ok(())
}
