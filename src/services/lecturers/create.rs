use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LecturerService;
use crate::models::lecturers::requests::CreateLecturerRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_required};

pub async fn create_lecturer(
    service: &LecturerService,
    request: &HttpRequest,
    lecturer_data: CreateLecturerRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_lecturer_data(&lecturer_data) {
        return Ok(
            ApiResponse::<serde_json::Value>::error(ErrorCode::ValidationFailed, message)
                .bad_request(),
        );
    }

    let storage = service.get_storage(request);
    match storage.create_lecturer(lecturer_data).await {
        Ok(lecturer) => {
            info!("Lecturer created: id={}", lecturer.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(lecturer)))
        }
        Err(e) => {
            error!("Lecturer creation failed: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to create lecturer",
            )
            .internal_server_error())
        }
    }
}

fn validate_lecturer_data(data: &CreateLecturerRequest) -> Result<(), &'static str> {
    validate_required(&data.name, "name is required")?;
    if let Some(email) = data.email.as_deref().filter(|e| !e.is_empty()) {
        validate_email(email)?;
    }
    Ok(())
}
