pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lecturers::requests::{CreateLecturerRequest, UpdateLecturerRequest};
use crate::storage::Storage;

pub struct LecturerService {
    storage: Option<Arc<dyn Storage>>,
}

impl LecturerService {
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

    // 获取讲师列表
    pub async fn list_lecturers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_lecturers(self, request).await
    }

    pub async fn create_lecturer(
        &self,
        request: &HttpRequest,
        lecturer_data: CreateLecturerRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_lecturer(self, request, lecturer_data).await
    }

    pub async fn get_lecturer(
        &self,
        request: &HttpRequest,
        lecturer_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_lecturer(self, request, lecturer_id).await
    }

    pub async fn update_lecturer(
        &self,
        request: &HttpRequest,
        lecturer_id: i64,
        update_data: UpdateLecturerRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_lecturer(self, request, lecturer_id, update_data).await
    }

    // 删除讲师及其课程、作业、提交
    pub async fn delete_lecturer(
        &self,
        request: &HttpRequest,
        lecturer_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_lecturer(self, request, lecturer_id).await
    }
}
