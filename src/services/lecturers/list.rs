use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LecturerService;
use crate::models::lecturers::responses::LecturerListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_lecturers(
    service: &LecturerService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_lecturers().await {
        Ok(lecturers) => {
            let total = lecturers.len() as u64;
            Ok(ApiResponse::success(LecturerListResponse { lecturers, total }).json())
        }
        Err(e) => {
            error!("Failed to list lecturers: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to list lecturers",
            )
            .internal_server_error())
        }
    }
}
