use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::{ApiResponse, ErrorCode};

/// 未提交某作业的学生名单
pub async fn missing_students(
    service: &ReportService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment(assignment_id).await {
        Ok(Some(_)) => {}
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
                "Failed to build report",
            )
            .internal_server_error());
        }
    }

    match storage.missing_students_for_assignment(assignment_id).await {
        Ok(students) => Ok(ApiResponse::success(students).json()),
        Err(e) => {
            error!("Failed to list missing students for {}: {}", assignment_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to build report",
            )
            .internal_server_error())
        }
    }
}
