use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update_data.name.as_deref() {
        if name.trim().is_empty() {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::ValidationFailed,
                "name must not be empty",
            )
            .bad_request());
        }
    }
    if let Some(email) = update_data.email.as_deref().filter(|e| !e.is_empty()) {
        if let Err(message) = validate_email(email) {
            return Ok(
                ApiResponse::<serde_json::Value>::error(ErrorCode::ValidationFailed, message)
                    .bad_request(),
            );
        }
    }

    let storage = service.get_storage(request);
    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            info!("Student updated: id={}", student.id);
            Ok(ApiResponse::success(student).json())
        }
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::StudentNotFound,
            "Student not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to update student {}: {}", student_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to update student",
            )
            .internal_server_error())
        }
    }
}
