use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::requests::StudentListQuery;
use crate::models::students::responses::StudentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_students(query.search).await {
        Ok(students) => {
            let total = students.len() as u64;
            Ok(ApiResponse::success(StudentListResponse { students, total }).json())
        }
        Err(e) => {
            error!("Failed to list students: {}", e);
            Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::InternalServerError,
                "Failed to list students",
            )
            .internal_server_error())
        }
    }
}
