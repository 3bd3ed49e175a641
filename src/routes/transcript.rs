use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::TranscriptService;
use crate::utils::{SafeCourseIdI64, SafeStudentIdI64};

// 懒加载的全局 TranscriptService 实例
static TRANSCRIPT_SERVICE: Lazy<TranscriptService> = Lazy::new(TranscriptService::new_lazy);

pub async fn full_transcript(req: HttpRequest) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE.get_full_transcript(&req).await
}

pub async fn course_transcript(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE
        .get_course_transcript(&req, course_id.0)
        .await
}

pub async fn student_transcript(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE
        .get_student_transcript(&req, student_id.0)
        .await
}

// 配置路由
pub fn configure_transcript_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/transcript")
            .service(web::resource("").route(web::get().to(full_transcript)))
            .service(web::resource("/course/{course_id}").route(web::get().to(course_transcript)))
            .service(
                web::resource("/student/{student_id}").route(web::get().to(student_transcript)),
            ),
    );
}
