use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::errors::TrackerError;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_required;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_course_data(&course_data) {
        return Ok(
            ApiResponse::<serde_json::Value>::error(ErrorCode::ValidationFailed, message)
                .bad_request(),
        );
    }

    let storage = service.get_storage(request);
    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course created: id={} code={}", course.id, course.course_code);
            Ok(HttpResponse::Created().json(ApiResponse::success(course)))
        }
        Err(TrackerError::Validation(message)) => Ok(ApiResponse::<serde_json::Value>::error(
            ErrorCode::InvalidReference,
            message,
        )
        .bad_request()),
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to create course",
            )
            .internal_server_error())
        }
    }
}

fn validate_course_data(data: &CreateCourseRequest) -> Result<(), &'static str> {
    validate_required(&data.course_code, "course_code is required")?;
    validate_required(&data.course_name, "course_name is required")?;
    if data.semester < 1 {
        return Err("semester must be a positive number");
    }
    Ok(())
}
