use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::assignments::entities::AssignmentStatus;
use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::assignments::responses::{AssignmentListItem, AssignmentListResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_assignments(query.course_id).await {
        Ok(records) => {
            let now = chrono::Utc::now();
            let assignments: Vec<AssignmentListItem> = records
                .into_iter()
                .map(|record| {
                    let status = AssignmentStatus::derive(
                        record.submission_count,
                        record.assignment.due_at,
                        now,
                    );
                    AssignmentListItem {
                        assignment: record.assignment,
                        course_code: record.course_code,
                        course_name: record.course_name,
                        submission_count: record.submission_count,
                        status,
                    }
                })
                .collect();
            let total = assignments.len() as u64;
            Ok(ApiResponse::success(AssignmentListResponse { assignments, total }).json())
        }
        Err(e) => {
            error!("Failed to list assignments: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to list assignments",
            )
            .internal_server_error())
        }
    }
}
