use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::errors::TrackerError;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_required};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_student_data(&student_data) {
        return Ok(
            ApiResponse::<serde_json::Value>::error(ErrorCode::ValidationFailed, message)
                .bad_request(),
        );
    }

    let storage = service.get_storage(request);
    match storage.create_student(student_data).await {
        Ok(student) => {
            info!(
                "Student created: id={} number={}",
                student.id, student.student_number
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(student)))
        }
        Err(TrackerError::ConstraintViolation(message)) => {
            error!("Student creation conflict: {}", message);
            Ok(
                ApiResponse::<serde_json::Value>::error(ErrorCode::DuplicateEntry, message)
                    .conflict(),
            )
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to create student",
            )
            .internal_server_error())
        }
    }
}

fn validate_student_data(data: &CreateStudentRequest) -> Result<(), &'static str> {
    validate_required(&data.name, "name is required")?;
    if let Some(email) = data.email.as_deref().filter(|e| !e.is_empty()) {
        validate_email(email)?;
    }
    Ok(())
}
