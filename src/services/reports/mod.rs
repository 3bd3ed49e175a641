pub mod counts;
pub mod missing;
pub mod scores;
pub mod timeliness;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::SortOrder;
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 全局平均分
    pub async fn average_score(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        scores::average_score(self, request).await
    }

    // 各课程平均分
    pub async fn average_score_per_course(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        scores::average_score_per_course(self, request).await
    }

    // 最高分前十提交
    pub async fn top_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        scores::top_submissions(self, request).await
    }

    // 最低分前十提交
    pub async fn bottom_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        scores::bottom_submissions(self, request).await
    }

    // 全部提交按分数排序，未评分排在末尾
    pub async fn sorted_submissions(
        &self,
        request: &HttpRequest,
        order: SortOrder,
    ) -> ActixResult<HttpResponse> {
        scores::sorted_submissions(self, request, order).await
    }

    // 每个学生的提交数
    pub async fn submission_count_per_student(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        counts::submission_count_per_student(self, request).await
    }

    // 每个作业的提交数
    pub async fn submission_count_per_assignment(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        counts::submission_count_per_assignment(self, request).await
    }

    // 没有任何提交的作业
    pub async fn assignments_without_submissions(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        counts::assignments_without_submissions(self, request).await
    }

    // 迟交提交
    pub async fn late_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        timeliness::late_submissions(self, request).await
    }

    // 按时提交
    pub async fn on_time_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        timeliness::on_time_submissions(self, request).await
    }

    // 未提交某作业的学生
    pub async fn missing_students(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        missing::missing_students(self, request, assignment_id).await
    }
}
