use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.get_submission(submission_id).await {
        Ok(Some(submission)) => Ok(ApiResponse::success(submission).json()),
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to get submission {}: {}", submission_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get submission",
            )
            .internal_server_error())
        }
    }
}
