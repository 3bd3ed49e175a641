use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("Course deleted: id={}", course_id);
            Ok(ApiResponse::success_empty("Course deleted").json())
        }
        Ok(false) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::CourseNotFound,
            "Course not found",
        )
        .not_found()),
        Err(e) => {
            error!("Failed to delete course {}: {}", course_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to delete course",
            )
            .internal_server_error())
        }
    }
}
