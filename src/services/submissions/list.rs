use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{record_to_item, SubmissionService};
use crate::models::submissions::requests::SubmissionListQuery;
use crate::models::submissions::responses::SubmissionListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    query: SubmissionListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_submission_records(query).await {
        Ok(records) => {
            let submissions: Vec<_> = records.into_iter().map(record_to_item).collect();
            let total = submissions.len() as u64;
            Ok(ApiResponse::success(SubmissionListResponse { submissions, total }).json())
        }
        Err(e) => {
            error!("Failed to list submissions: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to list submissions",
            )
            .internal_server_error())
        }
    }
}
