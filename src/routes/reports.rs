use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::reports::requests::SortedSubmissionsQuery;
use crate::services::ReportService;
use crate::utils::SafeAssignmentIdI64;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn average_score(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.average_score(&req).await
}

pub async fn average_score_per_course(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.average_score_per_course(&req).await
}

pub async fn top_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.top_submissions(&req).await
}

pub async fn bottom_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.bottom_submissions(&req).await
}

pub async fn sorted_submissions(
    req: HttpRequest,
    query: web::Query<SortedSubmissionsQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .sorted_submissions(&req, query.into_inner().order)
        .await
}

pub async fn submission_count_per_student(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.submission_count_per_student(&req).await
}

pub async fn submission_count_per_assignment(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.submission_count_per_assignment(&req).await
}

pub async fn assignments_without_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.assignments_without_submissions(&req).await
}

pub async fn late_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.late_submissions(&req).await
}

pub async fn on_time_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.on_time_submissions(&req).await
}

pub async fn missing_students(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.missing_students(&req, assignment_id.0).await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .route("/average-score", web::get().to(average_score))
            .route(
                "/average-score-per-course",
                web::get().to(average_score_per_course),
            )
            .route("/top-submissions", web::get().to(top_submissions))
            .route("/bottom-submissions", web::get().to(bottom_submissions))
            .route("/sorted-submissions", web::get().to(sorted_submissions))
            .route(
                "/submission-count-per-student",
                web::get().to(submission_count_per_student),
            )
            .route(
                "/submission-count-per-assignment",
                web::get().to(submission_count_per_assignment),
            )
            .route(
                "/assignments-without-submissions",
                web::get().to(assignments_without_submissions),
            )
            .route("/late-submissions", web::get().to(late_submissions))
            .route("/on-time-submissions", web::get().to(on_time_submissions))
            .route(
                "/assignments/{assignment_id}/missing-students",
                web::get().to(missing_students),
            ),
    );
}
