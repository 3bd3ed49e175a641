pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::requests::{
    CreateSubmissionRequest, SubmissionListQuery, UpdateSubmissionRequest,
};
use crate::models::submissions::responses::SubmissionListItem;
use crate::storage::{Storage, SubmissionRecord};

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 获取提交列表，支持按作业、学生、课程过滤
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        query: SubmissionListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, query).await
    }

    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        submission_data: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, submission_data).await
    }

    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_submission(self, request, submission_id).await
    }

    pub async fn update_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        update_data: UpdateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_submission(self, request, submission_id, update_data).await
    }

    pub async fn delete_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_submission(self, request, submission_id).await
    }
}

/// 联查记录转列表项，迟交状态按截止时间实时推导
pub(crate) fn record_to_item(record: SubmissionRecord) -> SubmissionListItem {
    let status = SubmissionStatus::derive(record.submission.submitted_at, Some(record.due_at));
    SubmissionListItem {
        submission: record.submission,
        student_number: record.student_number,
        student_name: record.student_name,
        assignment_title: record.assignment_title,
        course_code: record.course_code,
        status,
    }
}
