//! 报表与统计查询

use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func, NullOrdering};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, RelationTrait,
};

use super::submissions::{joined_submission_select, JoinedSubmissionRow};
use super::SeaOrmStorage;
use crate::entity::{assignments, courses, lecturers, students, submissions};
use crate::errors::{Result, TrackerError};
use crate::models::assignments::entities::Assignment;
use crate::models::reports::requests::SortOrder;
use crate::models::reports::responses::{
    AssignmentSubmissionCountRow, CourseAverageRow, StudentSubmissionCountRow,
};
use crate::models::submissions::entities::Submission;
use crate::storage::{EntityCounts, SubmissionRecord, TranscriptRecord};

#[derive(Debug, FromQueryResult)]
struct AvgRow {
    avg: Option<f64>,
    cnt: i64,
}

#[derive(Debug, FromQueryResult)]
struct CourseAvgRow {
    course_id: i64,
    course_code: String,
    course_name: String,
    avg: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct StudentCountRow {
    student_id: i64,
    student_number: String,
    student_name: String,
    cnt: i64,
}

#[derive(Debug, FromQueryResult)]
struct AssignmentCountRow {
    assignment_id: i64,
    title: String,
    course_code: String,
    cnt: i64,
}

#[derive(Debug, FromQueryResult)]
struct TranscriptRow {
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
    max_score: i32,
    due_at: i64,
    course_code: String,
    course_name: String,
}

impl SeaOrmStorage {
    /// 全部已评分提交的平均分与计数
    pub(super) async fn average_score_impl(&self) -> Result<(Option<f64>, u64)> {
        let row = submissions::Entity::find()
            .select_only()
            .column_as(
                Expr::expr(Func::avg(Expr::col((
                    submissions::Entity,
                    submissions::Column::Score,
                )))),
                "avg",
            )
            .column_as(submissions::Column::Score.count(), "cnt")
            .filter(submissions::Column::Score.is_not_null())
            .into_model::<AvgRow>()
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        match row {
            Some(row) => Ok((row.avg, row.cnt as u64)),
            None => Ok((None, 0)),
        }
    }

    /// 各课程平均分，无评分提交的课程平均分为空
    pub(super) async fn average_score_per_course_impl(&self) -> Result<Vec<CourseAverageRow>> {
        let rows = courses::Entity::find()
            .join(JoinType::LeftJoin, courses::Relation::Assignments.def())
            .join(JoinType::LeftJoin, assignments::Relation::Submissions.def())
            .select_only()
            .column_as(courses::Column::Id, "course_id")
            .column(courses::Column::CourseCode)
            .column(courses::Column::CourseName)
            .column_as(
                Expr::expr(Func::avg(Expr::col((
                    submissions::Entity,
                    submissions::Column::Score,
                )))),
                "avg",
            )
            .group_by(courses::Column::Id)
            .group_by(courses::Column::CourseCode)
            .group_by(courses::Column::CourseName)
            .order_by_asc(courses::Column::CourseCode)
            .into_model::<CourseAvgRow>()
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| CourseAverageRow {
                course_id: row.course_id,
                course_code: row.course_code,
                course_name: row.course_name,
                average: row.avg,
            })
            .collect())
    }

    /// 没有任何提交的作业及其课程信息
    pub(super) async fn assignments_without_submissions_impl(
        &self,
    ) -> Result<Vec<(Assignment, String, String)>> {
        let submitted = submissions::Entity::find()
            .select_only()
            .column(submissions::Column::AssignmentId)
            .into_query();

        let rows = assignments::Entity::find()
            .find_also_related(courses::Entity)
            .filter(assignments::Column::Id.not_in_subquery(submitted))
            .order_by_asc(assignments::Column::DueAt)
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(rows
            .into_iter()
            .filter_map(|(assignment, course)| {
                let course = course?;
                Some((
                    assignment.into_assignment(),
                    course.course_code,
                    course.course_name,
                ))
            })
            .collect())
    }

    /// 提交按分数排序，可选截断，未评分的提交排在末尾
    pub(super) async fn submissions_by_score_impl(
        &self,
        order: SortOrder,
        limit: Option<u64>,
    ) -> Result<Vec<SubmissionRecord>> {
        let sql_order = match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let mut finder = joined_submission_select()
            .order_by_with_nulls(submissions::Column::Score, sql_order, NullOrdering::Last)
            .order_by_asc(submissions::Column::Id);
        if let Some(limit) = limit {
            finder = finder.limit(limit);
        }

        let rows = finder
            .into_model::<JoinedSubmissionRow>()
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(rows.into_iter().map(JoinedSubmissionRow::into_record).collect())
    }

    /// 每个学生的提交数，零提交学生计为 0
    pub(super) async fn submission_count_per_student_impl(
        &self,
    ) -> Result<Vec<StudentSubmissionCountRow>> {
        let rows = students::Entity::find()
            .join(JoinType::LeftJoin, students::Relation::Submissions.def())
            .select_only()
            .column_as(students::Column::Id, "student_id")
            .column(students::Column::StudentNumber)
            .column_as(students::Column::Name, "student_name")
            .column_as(submissions::Column::Id.count(), "cnt")
            .group_by(students::Column::Id)
            .group_by(students::Column::StudentNumber)
            .group_by(students::Column::Name)
            .order_by(submissions::Column::Id.count(), Order::Desc)
            .order_by_asc(students::Column::StudentNumber)
            .into_model::<StudentCountRow>()
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| StudentSubmissionCountRow {
                student_id: row.student_id,
                student_number: row.student_number,
                student_name: row.student_name,
                submission_count: row.cnt as u64,
            })
            .collect())
    }

    /// 每个作业的提交数，零提交作业计为 0
    pub(super) async fn submission_count_per_assignment_impl(
        &self,
    ) -> Result<Vec<AssignmentSubmissionCountRow>> {
        let rows = assignments::Entity::find()
            .join(JoinType::InnerJoin, assignments::Relation::Course.def())
            .join(JoinType::LeftJoin, assignments::Relation::Submissions.def())
            .select_only()
            .column_as(assignments::Column::Id, "assignment_id")
            .column(assignments::Column::Title)
            .column(courses::Column::CourseCode)
            .column_as(submissions::Column::Id.count(), "cnt")
            .group_by(assignments::Column::Id)
            .group_by(assignments::Column::Title)
            .group_by(courses::Column::CourseCode)
            .order_by(submissions::Column::Id.count(), Order::Desc)
            .order_by_asc(courses::Column::CourseCode)
            .into_model::<AssignmentCountRow>()
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| AssignmentSubmissionCountRow {
                assignment_id: row.assignment_id,
                title: row.title,
                course_code: row.course_code,
                submission_count: row.cnt as u64,
            })
            .collect())
    }

    /// 成绩单条目，可按学生或课程过滤
    pub(super) async fn list_transcript_records_impl(
        &self,
        student_id: Option<i64>,
        course_id: Option<i64>,
    ) -> Result<Vec<TranscriptRecord>> {
        let mut finder = submissions::Entity::find()
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
            .column(assignments::Column::MaxScore)
            .column(assignments::Column::DueAt)
            .column(courses::Column::CourseCode)
            .column(courses::Column::CourseName)
            .order_by_asc(students::Column::StudentNumber)
            .order_by_asc(courses::Column::CourseCode)
            .order_by_asc(assignments::Column::DueAt);

        if let Some(student_id) = student_id {
            finder = finder.filter(submissions::Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = course_id {
            finder = finder.filter(assignments::Column::CourseId.eq(course_id));
        }

        let rows = finder
            .into_model::<TranscriptRow>()
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| TranscriptRecord {
                submission: Submission {
                    id: row.id,
                    assignment_id: row.assignment_id,
                    student_id: row.student_id,
                    submitted_at: DateTime::<Utc>::from_timestamp(row.submitted_at, 0)
                        .unwrap_or_default(),
                    file_path: row.file_path,
                    score: row.score,
                    remark: row.remark,
                    created_at: DateTime::<Utc>::from_timestamp(row.created_at, 0)
                        .unwrap_or_default(),
                    updated_at: DateTime::<Utc>::from_timestamp(row.updated_at, 0)
                        .unwrap_or_default(),
                },
                student_number: row.student_number,
                student_name: row.student_name,
                assignment_title: row.assignment_title,
                max_score: row.max_score,
                due_at: DateTime::<Utc>::from_timestamp(row.due_at, 0).unwrap_or_default(),
                course_code: row.course_code,
                course_name: row.course_name,
            })
            .collect())
    }

    /// 各实体总数
    pub(super) async fn entity_counts_impl(&self) -> Result<EntityCounts> {
        let students = students::Entity::find()
            .count(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        let lecturers = lecturers::Entity::find()
            .count(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        let courses = courses::Entity::find()
            .count(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        let assignments = assignments::Entity::find()
            .count(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        let submissions = submissions::Entity::find()
            .count(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;

        Ok(EntityCounts {
            students,
            lecturers,
            courses,
            assignments,
            submissions,
        })
    }
}
