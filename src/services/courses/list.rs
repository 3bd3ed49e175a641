use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::courses::requests::CourseListQuery;
use crate::models::courses::responses::CourseListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: CourseListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_courses(query).await {
        Ok(courses) => {
            let total = courses.len() as u64;
            Ok(ApiResponse::success(CourseListResponse { courses, total }).json())
        }
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to list courses",
            )
            .internal_server_error())
        }
    }
}
