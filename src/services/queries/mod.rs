pub mod catalog;
pub mod run;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct QueryService {
    storage: Option<Arc<dyn Storage>>,
}

impl QueryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            crate::storage::get_storage(request)
        }
    }

    // 预置查询目录
    pub async fn list_queries(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        catalog::list_queries(self, request).await
    }

    // 按编号执行预置查询
    pub async fn run_query(
        &self,
        request: &HttpRequest,
        query_id: u32,
    ) -> ActixResult<HttpResponse> {
        run::run_query(self, request, query_id).await
    }
}
