//! SeaORM 存储实现
//!
//! 按业务域拆分为子模块，mod.rs 负责连接管理与 trait 委托。

mod assignments;
mod courses;
mod lecturers;
mod raw_queries;
mod reports;
mod students;
mod submissions;

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

use super::{
    AssignmentRecord, EntityCounts, Storage, SubmissionRecord, TranscriptRecord,
};
use crate::config::AppConfig;
use crate::errors::{Result, TrackerError};
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::models::courses::requests::{
    CourseListQuery, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::lecturers::requests::{CreateLecturerRequest, UpdateLecturerRequest};
use crate::models::queries::responses::CannedQueryResult;
use crate::models::reports::requests::SortOrder;
use crate::models::reports::responses::{
    AssignmentSubmissionCountRow, CourseAverageRow, StudentSubmissionCountRow,
};
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::models::submissions::requests::{
    CreateSubmissionRequest, SubmissionListQuery, UpdateSubmissionRequest,
};
use crate::models::{
    assignments::entities::Assignment, courses::entities::Course, lecturers::entities::Lecturer,
    students::entities::Student, submissions::entities::Submission,
};

/// 基于 SeaORM 的存储实现
pub struct SeaOrmStorage {
    db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按配置建立连接并执行迁移
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let url = &config.database.url;

        if url.is_empty() {
            return Err(TrackerError::database_config(
                "database.url is not configured".to_string(),
            ));
        }

        let mut options = ConnectOptions::new(url.clone());
        options
            .max_connections(config.database.pool_size)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .map_err(|e| TrackerError::database_connection(e.to_string()))?;

        info!("Database connected: {}", redact_url(url));

        Migrator::up(&db, None)
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(Self { db })
    }

    /// 使用现成连接构建，调用方负责迁移（测试用）
    pub fn new_with_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub(crate) fn conn(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// 日志中隐藏连接串里的口令
fn redact_url(url: &str) -> String {
    match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            match (rest.find('@'), rest.find(':')) {
                (Some(at), Some(colon)) if colon < at => {
                    format!("{}{}:***{}", &url[..scheme_end + 3], &rest[..colon], &rest[at..])
                }
                _ => url.to_string(),
            }
        }
        None => url.to_string(),
    }
}

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_student(&self, request: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(request).await
    }

    async fn get_student(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_impl(id).await
    }

    async fn list_students(&self, search: Option<String>) -> Result<Vec<Student>> {
        self.list_students_impl(search).await
    }

    async fn update_student(
        &self,
        id: i64,
        request: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, request).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn create_lecturer(&self, request: CreateLecturerRequest) -> Result<Lecturer> {
        self.create_lecturer_impl(request).await
    }

    async fn get_lecturer(&self, id: i64) -> Result<Option<Lecturer>> {
        self.get_lecturer_impl(id).await
    }

    async fn list_lecturers(&self) -> Result<Vec<Lecturer>> {
        self.list_lecturers_impl().await
    }

    async fn update_lecturer(
        &self,
        id: i64,
        request: UpdateLecturerRequest,
    ) -> Result<Option<Lecturer>> {
        self.update_lecturer_impl(id, request).await
    }

    async fn delete_lecturer(&self, id: i64) -> Result<bool> {
        self.delete_lecturer_impl(id).await
    }

    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(request).await
    }

    async fn get_course(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_impl(id).await
    }

    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        self.list_courses_impl(query).await
    }

    async fn update_course(
        &self,
        id: i64,
        request: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(id, request).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn create_assignment(&self, request: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(request).await
    }

    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_impl(id).await
    }

    async fn list_assignments(&self, course_id: Option<i64>) -> Result<Vec<AssignmentRecord>> {
        self.list_assignments_impl(course_id).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        request: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, request).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<(Submission, Student)>> {
        self.list_submissions_for_assignment_impl(assignment_id).await
    }

    async fn missing_students_for_assignment(&self, assignment_id: i64) -> Result<Vec<Student>> {
        self.missing_students_for_assignment_impl(assignment_id).await
    }

    async fn create_submission(&self, request: CreateSubmissionRequest) -> Result<Submission> {
        self.create_submission_impl(request).await
    }

    async fn get_submission(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_impl(id).await
    }

    async fn list_submission_records(
        &self,
        query: SubmissionListQuery,
    ) -> Result<Vec<SubmissionRecord>> {
        self.list_submission_records_impl(query).await
    }

    async fn update_submission(
        &self,
        id: i64,
        request: UpdateSubmissionRequest,
    ) -> Result<Option<Submission>> {
        self.update_submission_impl(id, request).await
    }

    async fn delete_submission(&self, id: i64) -> Result<bool> {
        self.delete_submission_impl(id).await
    }

    async fn list_transcript_records(
        &self,
        student_id: Option<i64>,
        course_id: Option<i64>,
    ) -> Result<Vec<TranscriptRecord>> {
        self.list_transcript_records_impl(student_id, course_id).await
    }

    async fn entity_counts(&self) -> Result<EntityCounts> {
        self.entity_counts_impl().await
    }

    async fn average_score(&self) -> Result<(Option<f64>, u64)> {
        self.average_score_impl().await
    }

    async fn average_score_per_course(&self) -> Result<Vec<CourseAverageRow>> {
        self.average_score_per_course_impl().await
    }

    async fn assignments_without_submissions(
        &self,
    ) -> Result<Vec<(Assignment, String, String)>> {
        self.assignments_without_submissions_impl().await
    }

    async fn top_submissions_by_score(&self, limit: u64) -> Result<Vec<SubmissionRecord>> {
        self.submissions_by_score_impl(SortOrder::Desc, Some(limit)).await
    }

    async fn bottom_submissions_by_score(&self, limit: u64) -> Result<Vec<SubmissionRecord>> {
        self.submissions_by_score_impl(SortOrder::Asc, Some(limit)).await
    }

    async fn submission_count_per_student(&self) -> Result<Vec<StudentSubmissionCountRow>> {
        self.submission_count_per_student_impl().await
    }

    async fn submission_count_per_assignment(
        &self,
    ) -> Result<Vec<AssignmentSubmissionCountRow>> {
        self.submission_count_per_assignment_impl().await
    }

    async fn sorted_submissions_by_score(
        &self,
        order: SortOrder,
    ) -> Result<Vec<SubmissionRecord>> {
        self.submissions_by_score_impl(order, None).await
    }

    async fn run_canned_query(&self, id: u32) -> Result<Option<CannedQueryResult>> {
        self.run_canned_query_impl(id).await
    }
}
