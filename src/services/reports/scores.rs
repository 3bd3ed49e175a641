use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::reports::requests::SortOrder;
use crate::models::reports::responses::{AverageScoreReport, SubmissionReport};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::submissions::record_to_item;
use crate::storage::SubmissionRecord;

const TOP_LIMIT: u64 = 10;

fn report_error(context: &str, e: impl std::fmt::Display) -> HttpResponse {
    error!("{}: {}", context, e);
    ApiResponse::<serde_json::Value>::error(
        ErrorCode::InternalServerError,
        "Failed to build report",
    )
    .internal_server_error()
}

fn submission_report(records: Vec<SubmissionRecord>) -> HttpResponse {
    let submissions: Vec<_> = records.into_iter().map(record_to_item).collect();
    let total = submissions.len() as u64;
    ApiResponse::success(SubmissionReport { submissions, total }).json()
}

pub async fn average_score(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.average_score().await {
        Ok((average, graded_count)) => Ok(ApiResponse::success(AverageScoreReport {
            average,
            graded_count,
        })
        .json()),
        Err(e) => Ok(report_error("Failed to compute average score", e)),
    }
}

pub async fn average_score_per_course(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.average_score_per_course().await {
        Ok(rows) => Ok(ApiResponse::success(rows).json()),
        Err(e) => Ok(report_error("Failed to compute per-course averages", e)),
    }
}

pub async fn top_submissions(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.top_submissions_by_score(TOP_LIMIT).await {
        Ok(records) => Ok(submission_report(records)),
        Err(e) => Ok(report_error("Failed to list top submissions", e)),
    }
}

pub async fn bottom_submissions(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.bottom_submissions_by_score(TOP_LIMIT).await {
        Ok(records) => Ok(submission_report(records)),
        Err(e) => Ok(report_error("Failed to list bottom submissions", e)),
    }
}

pub async fn sorted_submissions(
    service: &ReportService,
    request: &HttpRequest,
    order: SortOrder,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.sorted_submissions_by_score(order).await {
        Ok(records) => Ok(submission_report(records)),
        Err(e) => Ok(report_error("Failed to list sorted submissions", e)),
    }
}
