use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LecturerService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_lecturer(
    service: &LecturerService,
    request: &HttpRequest,
    lecturer_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.delete_lecturer(lecturer_id).await {
        Ok(true) => {
            info!("Lecturer deleted: id={}", lecturer_id);
            Ok(ApiResponse::success_empty("Lecturer deleted").json())
        }
        Ok(false) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::LecturerNotFound,
            "Lecturer not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to delete lecturer {}: {}", lecturer_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to delete lecturer",
            )
            .internal_server_error())
        }
    }
}
