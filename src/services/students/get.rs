use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.get_student(student_id).await {
        Ok(Some(student)) => Ok(ApiResponse::success(student).json()),
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::StudentNotFound,
            "Student not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to get student {}: {}", student_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get student",
            )
            .internal_server_error())
        }
    }
}
