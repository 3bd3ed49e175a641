use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::errors::TrackerError;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_required;

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_data: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_required(&submission_data.file_path, "file_path is required") {
        return Ok(
            ApiResponse::<serde_json::Value>::error(ErrorCode::ValidationFailed, message)
                .bad_request(),
        );
    }

    let storage = service.get_storage(request);

    // 分数上限取决于作业满分，提前取出作业
    let assignment = match storage.get_assignment(submission_data.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InvalidReference,
                "referenced assignment does not exist",
            )
            .bad_request());
        }
        Err(e) => {
            error!("Failed to get assignment for submission: {}", e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to create submission",
            )
            .internal_server_error());
        }
    };

    if let Some(score) = submission_data.score {
        if score < 0 || score > assignment.max_score {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::ValidationFailed,
                format!("score must be between 0 and {}", assignment.max_score),
            )
            .bad_request());
        }
    }

    match storage.create_submission(submission_data).await {
        Ok(submission) => {
            info!(
                "Submission created: id={} assignment={} student={}",
                submission.id, submission.assignment_id, submission.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(submission)))
        }
        Err(TrackerError::Validation(message)) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::InvalidReference,
            message,
        )
        .bad_request()),
        Err(e) => {
            error!("Submission creation failed: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to create submission",
            )
            .internal_server_error())
        }
    }
}
