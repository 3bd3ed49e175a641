use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::QueryService;
use crate::utils::SafeQueryIdU32;

// 懒加载的全局 QueryService 实例
static QUERY_SERVICE: Lazy<QueryService> = Lazy::new(QueryService::new_lazy);

pub async fn list_queries(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUERY_SERVICE.list_queries(&req).await
}

pub async fn run_query(req: HttpRequest, query_id: SafeQueryIdU32) -> ActixResult<HttpResponse> {
    QUERY_SERVICE.run_query(&req, query_id.0).await
}

// 配置路由
pub fn configure_queries_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/queries")
            .service(web::resource("").route(web::get().to(list_queries)))
            .service(web::resource("/{query_id}").route(web::get().to(run_query))),
    );
}
