use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DashboardService;
use crate::models::assignments::entities::AssignmentStatus;
use crate::models::dashboard::responses::{DashboardAssignment, DashboardResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 全部作业按状态分入 missing、upcoming、submitted 三组
pub async fn get_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let records = match storage.list_assignments(None).await {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to build dashboard: {}", e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to build dashboard",
            )
            .internal_server_error());
        }
    };

    let counts = match storage.entity_counts().await {
        Ok(counts) => counts,
        Err(e) => {
            error!("Failed to count entities for dashboard: {}", e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to build dashboard",
            )
            .internal_server_error());
        }
    };

    let now = chrono::Utc::now();
    let mut missing = Vec::new();
    let mut upcoming = Vec::new();
    let mut submitted = Vec::new();

    for record in records {
        let status =
            AssignmentStatus::derive(record.submission_count, record.assignment.due_at, now);
        let entry = DashboardAssignment {
            assignment: record.assignment,
            course_code: record.course_code,
            course_name: record.course_name,
            submission_count: record.submission_count,
        };
        match status {
            AssignmentStatus::Missing => missing.push(entry),
            AssignmentStatus::NoSubmissionYet => upcoming.push(entry),
            AssignmentStatus::HasSubmissions => submitted.push(entry),
        }
    }

    Ok(ApiResponse::success(DashboardResponse {
        missing,
        upcoming,
        submitted,
        student_count: counts.students,
        course_count: counts.courses,
        assignment_count: counts.assignments,
        submission_count: counts.submissions,
    })
    .json())
}
