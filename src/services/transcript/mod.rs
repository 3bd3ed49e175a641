pub mod view;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct TranscriptService {
    storage: Option<Arc<dyn Storage>>,
}

impl TranscriptService {
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

    // 全量成绩单：全部提交及其课程、学生上下文
    pub async fn get_full_transcript(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        view::get_full_transcript(self, request).await
    }

    // 课程成绩单：某课程下的全部提交
    pub async fn get_course_transcript(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        view::get_course_transcript(self, request, course_id).await
    }

    // 学生成绩单：某学生的全部提交，附平均分
    pub async fn get_student_transcript(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        view::get_student_transcript(self, request, student_id).await
    }
}
