use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::errors::TrackerError;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Some(semester) = update_data.semester {
        if semester < 1 {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::ValidationFailed,
                "semester must be a positive number",
            )
            .bad_request());
        }
    }

    let storage = service.get_storage(request);
    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Course updated: id={}", course.id);
            Ok(ApiResponse::success(course).json())
        }
        Ok(None) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::CourseNotFound,
            "Course not found",
        )
        .not_found()),
        Err(TrackerError::Validation(message)) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::InvalidReference,
            message,
        )
        .bad_request()),
        Err(e) => {
            error!("Failed to update course {}: {}", course_id, e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to update course",
            )
            .internal_server_error())
        }
    }
}
