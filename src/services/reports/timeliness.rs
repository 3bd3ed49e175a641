use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::reports::responses::SubmissionReport;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::requests::SubmissionListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::submissions::record_to_item;

/// 按迟交与否过滤全部提交
///
/// 迟交判定是派生逻辑，复用状态推导而不是在 SQL 里重复比较。
async fn submissions_by_status(
    service: &ReportService,
    request: &HttpRequest,
    wanted: SubmissionStatus,
    context: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let query = SubmissionListQuery {
        assignment_id: None,
        student_id: None,
        course_id: None,
    };

    match storage.list_submission_records(query).await {
        Ok(records) => {
            let submissions: Vec<_> = records
                .into_iter()
                .map(record_to_item)
                .filter(|item| item.status == wanted)
                .collect();
            let total = submissions.len() as u64;
            Ok(ApiResponse::success(SubmissionReport { submissions, total }).json())
        }
        Err(e) => {
            error!("{}: {}", context, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to build report",
            )
            .internal_server_error())
        }
    }
}

pub async fn late_submissions(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    submissions_by_status(
        service,
        request,
        SubmissionStatus::Late,
        "Failed to list late submissions",
    )
    .await
}

pub async fn on_time_submissions(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    submissions_by_status(
        service,
        request,
        SubmissionStatus::OnTime,
        "Failed to list on-time submissions",
    )
    .await
}
