//! 作业存储操作

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Set, SqlErr,
};

use super::SeaOrmStorage;
use crate::entity::{assignments, courses, students, submissions};
use crate::errors::{Result, TrackerError};
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::models::students::entities::Student;
use crate::models::submissions::entities::Submission;
use crate::storage::AssignmentRecord;

/// 按作业分组的提交计数行
#[derive(Debug, FromQueryResult)]
struct SubmissionCountRow {
    assignment_id: i64,
    cnt: i64,
}

impl SeaOrmStorage {
    pub(super) async fn create_assignment_impl(
        &self,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();
        let model = assignments::ActiveModel {
            course_id: Set(request.course_id),
            title: Set(request.title),
            description: Set(request.description),
            due_at: Set(request.due_at),
            max_score: Set(request.max_score.unwrap_or(100)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(self.conn()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
                TrackerError::validation("referenced course does not exist".to_string())
            } else {
                TrackerError::database_operation(e.to_string())
            }
        })?;
        Ok(inserted.into_assignment())
    }

    pub(super) async fn get_assignment_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let found = assignments::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(found.map(|m| m.into_assignment()))
    }

    /// 列出作业及课程信息与提交计数
    ///
    /// 分两步：作业联查课程，再按作业分组统计提交数后在内存合并。
    pub(super) async fn list_assignments_impl(
        &self,
        course_id: Option<i64>,
    ) -> Result<Vec<AssignmentRecord>> {
        let mut finder = assignments::Entity::find()
            .find_also_related(courses::Entity)
            .order_by_asc(assignments::Column::DueAt);
        if let Some(course_id) = course_id {
            finder = finder.filter(assignments::Column::CourseId.eq(course_id));
        }

        let rows = finder
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        let counts: HashMap<i64, u64> = submissions::Entity::find()
            .select_only()
            .column(submissions::Column::AssignmentId)
            .column_as(submissions::Column::Id.count(), "cnt")
            .group_by(submissions::Column::AssignmentId)
            .into_model::<SubmissionCountRow>()
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?
            .into_iter()
            .map(|row| (row.assignment_id, row.cnt as u64))
            .collect();

        let records = rows
            .into_iter()
            .filter_map(|(assignment, course)| {
                let course = course?;
                let submission_count = counts.get(&assignment.id).copied().unwrap_or(0);
                Some(AssignmentRecord {
                    assignment: assignment.into_assignment(),
                    course_code: course.course_code,
                    course_name: course.course_name,
                    submission_count,
                })
            })
            .collect();
        Ok(records)
    }

    pub(super) async fn update_assignment_impl(
        &self,
        id: i64,
        request: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let Some(existing) = assignments::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut model: assignments::ActiveModel = existing.into();
        if let Some(course_id) = request.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(title) = request.title {
            model.title = Set(title);
        }
        if let Some(description) = request.description {
            model.description = Set(Some(description));
        }
        if let Some(due_at) = request.due_at {
            model.due_at = Set(due_at);
        }
        if let Some(max_score) = request.max_score {
            model.max_score = Set(max_score);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model.update(self.conn()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
                TrackerError::validation("referenced course does not exist".to_string())
            } else {
                TrackerError::database_operation(e.to_string())
            }
        })?;
        Ok(Some(updated.into_assignment()))
    }

    /// 删除作业，其提交由外键级联删除
    pub(super) async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = assignments::Entity::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    pub(super) async fn list_submissions_for_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<(Submission, Student)>> {
        let rows = submissions::Entity::find()
            .filter(submissions::Column::AssignmentId.eq(assignment_id))
            .find_also_related(students::Entity)
            .order_by_asc(submissions::Column::SubmittedAt)
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(rows
            .into_iter()
            .filter_map(|(submission, student)| {
                let student = student?;
                Some((submission.into_submission(), student.into_student()))
            })
            .collect())
    }

    /// 未提交该作业的学生：全体学生中排除已提交者
    pub(super) async fn missing_students_for_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Student>> {
        let submitted = submissions::Entity::find()
            .filter(submissions::Column::AssignmentId.eq(assignment_id))
            .select_only()
            .column(submissions::Column::StudentId)
            .into_query();

        let rows = students::Entity::find()
            .filter(students::Column::Id.not_in_subquery(submitted))
            .order_by_asc(students::Column::StudentNumber)
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(rows.into_iter().map(|m| m.into_student()).collect())
    }
}
