//! 存储抽象层
//!
//! Storage trait 定义所有持久化操作，SeaOrmStorage 为其默认实现。
//! 服务层只依赖 trait，便于替换实现与测试。

pub mod canned;
pub mod sea_orm_storage;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::errors::Result;
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

/// 提交的联查记录：提交本体加上判定状态所需的上下文
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub submission: Submission,
    pub student_number: String,
    pub student_name: String,
    pub assignment_title: String,
    pub course_code: String,
    pub due_at: DateTime<Utc>,
}

/// 作业的联查记录：作业本体加上课程信息与提交计数
#[derive(Debug, Clone)]
pub struct AssignmentRecord {
    pub assignment: Assignment,
    pub course_code: String,
    pub course_name: String,
    pub submission_count: u64,
}

/// 成绩单条目的联查记录
#[derive(Debug, Clone)]
pub struct TranscriptRecord {
    pub submission: Submission,
    pub student_number: String,
    pub student_name: String,
    pub assignment_title: String,
    pub max_score: i32,
    pub due_at: DateTime<Utc>,
    pub course_code: String,
    pub course_name: String,
}

/// 各实体计数
#[derive(Debug, Clone, Copy)]
pub struct EntityCounts {
    pub students: u64,
    pub lecturers: u64,
    pub courses: u64,
    pub assignments: u64,
    pub submissions: u64,
}

/// 存储层接口
#[async_trait]
pub trait Storage: Send + Sync {
    // ==================== 学生 ====================

    /// 创建学生，学号未显式指定时由存储层按当前数值最大学号自动分配
    async fn create_student(&self, request: CreateStudentRequest) -> Result<Student>;

    async fn get_student(&self, id: i64) -> Result<Option<Student>>;

    /// 列出学生，支持按姓名或学号模糊搜索
    async fn list_students(&self, search: Option<String>) -> Result<Vec<Student>>;

    /// 更新学生，不存在时返回 None
    async fn update_student(
        &self,
        id: i64,
        request: UpdateStudentRequest,
    ) -> Result<Option<Student>>;

    /// 删除学生，返回是否确有删除
    async fn delete_student(&self, id: i64) -> Result<bool>;

    // ==================== 讲师 ====================

    async fn create_lecturer(&self, request: CreateLecturerRequest) -> Result<Lecturer>;

    async fn get_lecturer(&self, id: i64) -> Result<Option<Lecturer>>;

    async fn list_lecturers(&self) -> Result<Vec<Lecturer>>;

    async fn update_lecturer(
        &self,
        id: i64,
        request: UpdateLecturerRequest,
    ) -> Result<Option<Lecturer>>;

    async fn delete_lecturer(&self, id: i64) -> Result<bool>;

    // ==================== 课程 ====================

    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course>;

    async fn get_course(&self, id: i64) -> Result<Option<Course>>;

    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>>;

    async fn update_course(&self, id: i64, request: UpdateCourseRequest)
        -> Result<Option<Course>>;

    async fn delete_course(&self, id: i64) -> Result<bool>;

    // ==================== 作业 ====================

    async fn create_assignment(&self, request: CreateAssignmentRequest) -> Result<Assignment>;

    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>>;

    /// 列出作业及其课程信息和提交计数，可按课程过滤
    async fn list_assignments(&self, course_id: Option<i64>) -> Result<Vec<AssignmentRecord>>;

    async fn update_assignment(
        &self,
        id: i64,
        request: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;

    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 某作业的全部提交及对应学生
    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<(Submission, Student)>>;

    /// 未提交某作业的学生（全体学生与已提交学生的差集）
    async fn missing_students_for_assignment(&self, assignment_id: i64) -> Result<Vec<Student>>;

    // ==================== 提交 ====================

    async fn create_submission(&self, request: CreateSubmissionRequest) -> Result<Submission>;

    async fn get_submission(&self, id: i64) -> Result<Option<Submission>>;

    /// 联查提交记录，支持按作业、学生、课程过滤
    async fn list_submission_records(
        &self,
        query: SubmissionListQuery,
    ) -> Result<Vec<SubmissionRecord>>;

    async fn update_submission(
        &self,
        id: i64,
        request: UpdateSubmissionRequest,
    ) -> Result<Option<Submission>>;

    async fn delete_submission(&self, id: i64) -> Result<bool>;

    // ==================== 成绩单与总览 ====================

    /// 成绩单条目，可按学生或课程过滤
    async fn list_transcript_records(
        &self,
        student_id: Option<i64>,
        course_id: Option<i64>,
    ) -> Result<Vec<TranscriptRecord>>;

    async fn entity_counts(&self) -> Result<EntityCounts>;

    // ==================== 报表 ====================

    /// 全部已评分提交的平均分与计数
    async fn average_score(&self) -> Result<(Option<f64>, u64)>;

    /// 各课程已评分提交的平均分
    async fn average_score_per_course(&self) -> Result<Vec<CourseAverageRow>>;

    /// 没有任何提交的作业
    async fn assignments_without_submissions(&self)
        -> Result<Vec<(Assignment, String, String)>>;

    /// 按分数排序的前 N 条提交，未评分排在末尾
    async fn top_submissions_by_score(&self, limit: u64) -> Result<Vec<SubmissionRecord>>;

    /// 按分数排序的后 N 条提交，未评分排在末尾
    async fn bottom_submissions_by_score(&self, limit: u64) -> Result<Vec<SubmissionRecord>>;

    /// 每个学生的提交数（含零提交学生）
    async fn submission_count_per_student(&self) -> Result<Vec<StudentSubmissionCountRow>>;

    /// 每个作业的提交数（含零提交作业）
    async fn submission_count_per_assignment(&self)
        -> Result<Vec<AssignmentSubmissionCountRow>>;

    /// 全部提交按分数排序，未评分排在末尾
    async fn sorted_submissions_by_score(&self, order: SortOrder)
        -> Result<Vec<SubmissionRecord>>;

    // ==================== 预置查询 ====================

    /// 按编号执行预置查询，编号不存在时返回 None
    async fn run_canned_query(&self, id: u32) -> Result<Option<CannedQueryResult>>;
}

/// 根据配置创建存储实例
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 从请求上下文取出存储实例
pub fn get_storage(request: &actix_web::HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}
