use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.delete_submission(submission_id).await {
        Ok(true) => {
            info!("Submission deleted: id={}", submission_id);
            Ok(ApiResponse::success_empty("Submission deleted").json())
        }
        Ok(false) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to delete submission {}: {}", submission_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to delete submission",
            )
            .internal_server_error())
        }
    }
}
