use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LecturerService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_lecturer(
    service: &LecturerService,
    request: &HttpRequest,
    lecturer_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.get_lecturer(lecturer_id).await {
        Ok(Some(lecturer)) => Ok(ApiResponse::success(lecturer).json()),
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::LecturerNotFound,
            "Lecturer not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to get lecturer {}: {}", lecturer_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get lecturer",
            )
            .internal_server_error())
        }
    }
}
