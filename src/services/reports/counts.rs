use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::reports::responses::{
    AssignmentWithoutSubmissions, AssignmentsWithoutSubmissionsReport,
};
use crate::models::{ApiResponse, ErrorCode};

fn report_error(context: &str, e: impl std::fmt::Display) -> HttpResponse {
    error!("{}: {}", context, e);
    ApiResponse::<serde_json::Value>::error(
        ErrorCode::InternalServerError,
        "Failed to build report",
    )
    .internal_server_error()
}

pub async fn submission_count_per_student(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.submission_count_per_student().await {
        Ok(rows) => Ok(ApiResponse::success(rows).json()),
        Err(e) => Ok(report_error("Failed to count submissions per student", e)),
    }
}

pub async fn submission_count_per_assignment(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.submission_count_per_assignment().await {
        Ok(rows) => Ok(ApiResponse::success(rows).json()),
        Err(e) => Ok(report_error("Failed to count submissions per assignment", e)),
    }
}

pub async fn assignments_without_submissions(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.assignments_without_submissions().await {
        Ok(rows) => {
            let assignments: Vec<AssignmentWithoutSubmissions> = rows
                .into_iter()
                .map(|(assignment, course_code, course_name)| AssignmentWithoutSubmissions {
                    assignment,
                    course_code,
                    course_name,
                })
                .collect();
            let total = assignments.len() as u64;
            Ok(
                ApiResponse::success(AssignmentsWithoutSubmissionsReport { assignments, total })
                    .json(),
            )
        }
        Err(e) => Ok(report_error("Failed to list assignments without submissions", e)),
    }
}
