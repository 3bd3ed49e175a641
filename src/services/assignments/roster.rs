use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::assignments::responses::{
    AssignmentRosterResponse, RosterEntry, RosterSubmission,
};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 作业提交名单：已交学生附提交详情，未交学生为全体学生与已交者的差集
pub async fn get_roster(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )
            .not_found());
        }
        Err(e) => {
            error!("Failed to get assignment {}: {}", assignment_id, e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get assignment roster",
            )
            .internal_server_error());
        }
    };

    let submitted = match storage.list_submissions_for_assignment(assignment_id).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to list submissions for assignment {}: {}", assignment_id, e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get assignment roster",
            )
            .internal_server_error());
        }
    };

    let not_submitted = match storage.missing_students_for_assignment(assignment_id).await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to list missing students for assignment {}: {}", assignment_id, e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get assignment roster",
            )
            .internal_server_error());
        }
    };

    let due_at = assignment.due_at;
    let submitted = submitted
        .into_iter()
        .map(|(submission, student)| RosterEntry {
            student,
            submission: Some(RosterSubmission {
                submission_id: submission.id,
                submitted_at: submission.submitted_at,
                score: submission.score,
                status: SubmissionStatus::derive(submission.submitted_at, Some(due_at)),
            }),
        })
        .collect();

    Ok(ApiResponse::success(AssignmentRosterResponse {
        assignment,
        submitted,
        not_submitted,
    })
    .json())
}
