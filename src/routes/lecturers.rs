use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::lecturers::requests::{CreateLecturerRequest, UpdateLecturerRequest};
use crate::services::LecturerService;
use crate::utils::SafeLecturerIdI64;

// 懒加载的全局 LecturerService 实例
static LECTURER_SERVICE: Lazy<LecturerService> = Lazy::new(LecturerService::new_lazy);

// HTTP处理程序
pub async fn list_lecturers(req: HttpRequest) -> ActixResult<HttpResponse> {
    LECTURER_SERVICE.list_lecturers(&req).await
}

pub async fn create_lecturer(
    req: HttpRequest,
    lecturer_data: web::Json<CreateLecturerRequest>,
) -> ActixResult<HttpResponse> {
    LECTURER_SERVICE
        .create_lecturer(&req, lecturer_data.into_inner())
        .await
}

pub async fn get_lecturer(
    req: HttpRequest,
    lecturer_id: SafeLecturerIdI64,
) -> ActixResult<HttpResponse> {
    LECTURER_SERVICE.get_lecturer(&req, lecturer_id.0).await
}

pub async fn update_lecturer(
    req: HttpRequest,
    lecturer_id: SafeLecturerIdI64,
    update_data: web::Json<UpdateLecturerRequest>,
) -> ActixResult<HttpResponse> {
    LECTURER_SERVICE
        .update_lecturer(&req, lecturer_id.0, update_data.into_inner())
        .await
}

pub async fn delete_lecturer(
    req: HttpRequest,
    lecturer_id: SafeLecturerIdI64,
) -> ActixResult<HttpResponse> {
    LECTURER_SERVICE.delete_lecturer(&req, lecturer_id.0).await
}

// 配置路由
pub fn configure_lecturers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lecturers")
            .service(
                web::resource("")
                    .route(web::get().to(list_lecturers))
                    .route(web::post().to(create_lecturer)),
            )
            .service(
                web::resource("/{lecturer_id}")
                    .route(web::get().to(get_lecturer))
                    .route(web::put().to(update_lecturer))
                    .route(web::delete().to(delete_lecturer)),
            ),
    );
}
