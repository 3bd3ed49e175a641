use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SystemService;
use crate::models::dashboard::responses::OverviewResponse;
use crate::models::{ApiResponse, ErrorCode};

const SYSTEM_DESCRIPTION: &str =
    "Student assignment tracker: students, lecturers, courses, assignments and submissions";

pub async fn get_overview(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.entity_counts().await {
        Ok(counts) => Ok(ApiResponse::success(OverviewResponse {
            description: SYSTEM_DESCRIPTION.to_string(),
            student_count: counts.students,
            lecturer_count: counts.lecturers,
            course_count: counts.courses,
            assignment_count: counts.assignments,
            submission_count: counts.submissions,
        })
        .json()),
        Err(e) => {
            error!("Failed to build overview: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to build overview",
            )
            .internal_server_error())
        }
    }
}
