use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.delete_student(student_id).await {
        Ok(true) => {
            info!("Student deleted: id={}", student_id);
            Ok(ApiResponse::success_empty("Student deleted").json())
        }
        Ok(false) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::StudentNotFound,
            "Student not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to delete student {}: {}", student_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to delete student",
            )
            .internal_server_error())
        }
    }
}
