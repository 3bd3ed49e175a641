use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::courses::entities::CourseDetail;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::CourseNotFound,
                "Course not found",
            )
            .not_found());
        }
        Err(e) => {
            error!("Failed to get course {}: {}", course_id, e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get course",
            )
            .internal_server_error());
        }
    };

    let lecturer_name = match storage.get_lecturer(course.lecturer_id).await {
        Ok(Some(lecturer)) => lecturer.name,
        Ok(None) => String::new(),
        Err(e) => {
            error!("Failed to get lecturer for course {}: {}", course_id, e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get course",
            )
            .internal_server_error());
        }
    };

    let assignments = match storage.list_assignments(Some(course_id)).await {
        Ok(records) => records.into_iter().map(|r| r.assignment).collect(),
        Err(e) => {
            error!("Failed to list assignments for course {}: {}", course_id, e);
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to get course",
            )
            .internal_server_error());
        }
    };

    Ok(ApiResponse::success(CourseDetail {
        course,
        lecturer_name,
        assignments,
    })
    .json())
}
