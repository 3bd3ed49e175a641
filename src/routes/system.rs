use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn get_overview(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_overview(&request).await
}

pub async fn toggle_edit_mode(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.toggle_edit_mode(&request).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .wrap(middleware::Compress::default())
            .route("/overview", web::get().to(get_overview))
            .route("/toggle-edit", web::post().to(toggle_edit_mode)),
    );
}
