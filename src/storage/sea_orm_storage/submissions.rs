//! 提交存储操作

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set, SqlErr,
};

use super::SeaOrmStorage;
use crate::entity::{assignments, courses, students, submissions};
use crate::errors::{Result, TrackerError};
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::{
    CreateSubmissionRequest, SubmissionListQuery, UpdateSubmissionRequest,
};
use crate::storage::SubmissionRecord;

/// 提交联查行：提交字段加学生、作业、课程上下文
#[derive(Debug, FromQueryResult)]
pub(super) struct JoinedSubmissionRow {
    id: i64,
    assignment_id: i64,
    student_id: i64,
    submitted_at: i64,
    file_path: String,
    score: Option<i32>,
    remark: Option<String>,
    created_at: i64,
    updated_at: i64,
    student_number: String,
    student_name: String,
    assignment_title: String,
    course_code: String,
    due_at: i64,
}

impl JoinedSubmissionRow {
    pub(super) fn into_record(self) -> SubmissionRecord {
        SubmissionRecord {
            submission: Submission {
                id: self.id,
                assignment_id: self.assignment_id,
                student_id: self.student_id,
                submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0)
                    .unwrap_or_default(),
                file_path: self.file_path,
                score: self.score,
                remark: self.remark,
                created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0)
                    .unwrap_or_default(),
                updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0)
                    .unwrap_or_default(),
            },
            student_number: self.student_number,
            student_name: self.student_name,
            assignment_title: self.assignment_title,
            course_code: self.course_code,
            due_at: DateTime::<Utc>::from_timestamp(self.due_at, 0).unwrap_or_default(),
        }
    }
}

/// 联查提交、学生、作业、课程的基础查询
pub(super) fn joined_submission_select() -> Select<submissions::Entity> {
    submissions::Entity::find()
        .join(JoinType::InnerJoin, submissions::Relation::Student.def())
        .join(JoinType::InnerJoin, submissions::Relation::Assignment.def())
        .join(JoinType::InnerJoin, assignments::Relation::Course.def())
        .select_only()
        .column(submissions::Column::Id)
        .column(submissions::Column::AssignmentId)
        .column(submissions::Column::StudentId)
        .column(submissions::Column::SubmittedAt)
        .column(submissions::Column::FilePath)
        .column(submissions::Column::Score)
        .column(submissions::Column::Remark)
        .column(submissions::Column::CreatedAt)
        .column(submissions::Column::UpdatedAt)
        .column_as(students::Column::StudentNumber, "student_number")
        .column_as(students::Column::Name, "student_name")
        .column_as(assignments::Column::Title, "assignment_title")
        .column_as(courses::Column::CourseCode, "course_code")
        .column_as(assignments::Column::DueAt, "due_at")
}

impl SeaOrmStorage {
    pub(super) async fn create_submission_impl(
        &self,
        request: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();
        let model = submissions::ActiveModel {
            assignment_id: Set(request.assignment_id),
            student_id: Set(request.student_id),
            submitted_at: Set(request.submitted_at.unwrap_or(now)),
            file_path: Set(request.file_path),
            score: Set(request.score),
            remark: Set(request.remark),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(self.conn()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
                TrackerError::validation(
                    "referenced assignment or student does not exist".to_string(),
                )
            } else {
                TrackerError::database_operation(e.to_string())
            }
        })?;
        Ok(inserted.into_submission())
    }

    pub(super) async fn get_submission_impl(&self, id: i64) -> Result<Option<Submission>> {
        let found = submissions::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(found.map(|m| m.into_submission()))
    }

    pub(super) async fn list_submission_records_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<Vec<SubmissionRecord>> {
        let mut finder =
            joined_submission_select().order_by_desc(submissions::Column::SubmittedAt);

        if let Some(assignment_id) = query.assignment_id {
            finder = finder.filter(submissions::Column::AssignmentId.eq(assignment_id));
        }
        if let Some(student_id) = query.student_id {
            finder = finder.filter(submissions::Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = query.course_id {
            finder = finder.filter(assignments::Column::CourseId.eq(course_id));
        }

        let rows = finder
            .into_model::<JoinedSubmissionRow>()
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(rows.into_iter().map(JoinedSubmissionRow::into_record).collect())
    }

    pub(super) async fn update_submission_impl(
        &self,
        id: i64,
        request: UpdateSubmissionRequest,
    ) -> Result<Option<Submission>> {
        let Some(existing) = submissions::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut model: submissions::ActiveModel = existing.into();
        if let Some(submitted_at) = request.submitted_at {
            model.submitted_at = Set(submitted_at);
        }
        if let Some(file_path) = request.file_path {
            model.file_path = Set(file_path);
        }
        if let Some(score) = request.score {
            model.score = Set(Some(score));
        }
        if let Some(remark) = request.remark {
            model.remark = Set(Some(remark));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(Some(updated.into_submission()))
    }

    pub(super) async fn delete_submission_impl(&self, id: i64) -> Result<bool> {
        let result = submissions::Entity::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}
