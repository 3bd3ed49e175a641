use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::models::submissions::requests::UpdateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    update_data: UpdateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 评分校验需要作业满分
    if let Some(score) = update_data.score {
        let max_score = match storage.get_submission(submission_id).await {
            Ok(Some(submission)) => {
                match storage.get_assignment(submission.assignment_id).await {
                    Ok(Some(assignment)) => assignment.max_score,
                    Ok(None) => 100,
                    Err(e) => {
                        error!("Failed to get assignment for submission {}: {}", submission_id, e);
                        return Ok(ApiResponse::<serde_json::Value>::error(
                            ErrorCode::InternalServerError,
                            "Failed to update submission",
                        )
                        .internal_server_error());
                    }
                }
            }
            Ok(None) => {
                return Ok(ApiResponse::<serde_json::Value>::error(
                    ErrorCode::SubmissionNotFound,
                    "Submission not found",
                )
                .not_found());
            }
            Err(e) => {
                error!("Failed to get submission {}: {}", submission_id, e);
                return Ok(ApiResponse::<serde_json::Value>::error(
                    ErrorCode::InternalServerError,
                    "Failed to update submission",
                )
                .internal_server_error());
            }
        };

        if score < 0 || score > max_score {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::ValidationFailed,
                format!("score must be between 0 and {max_score}"),
            )
            .bad_request());
        }
    }

    match storage.update_submission(submission_id, update_data).await {
        Ok(Some(submission)) => {
            info!("Submission updated: id={}", submission.id);
            Ok(ApiResponse::success(submission).json())
        }
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to update submission {}: {}", submission_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to update submission",
            )
            .internal_server_error())
        }
    }
}
