use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LecturerService;
use crate::models::lecturers::requests::UpdateLecturerRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

pub async fn update_lecturer(
    service: &LecturerService,
    request: &HttpRequest,
    lecturer_id: i64,
    update_data: UpdateLecturerRequest,
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
    match storage.update_lecturer(lecturer_id, update_data).await {
        Ok(Some(lecturer)) => {
            info!("Lecturer updated: id={}", lecturer.id);
            Ok(ApiResponse::success(lecturer).json())
        }
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::LecturerNotFound,
            "Lecturer not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to update lecturer {}: {}", lecturer_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to update lecturer",
            )
            .internal_server_error())
        }
    }
}
