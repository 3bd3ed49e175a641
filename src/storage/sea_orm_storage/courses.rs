//! 课程存储操作

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr};

use super::SeaOrmStorage;
use crate::entity::courses;
use crate::errors::{Result, TrackerError};
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest};

impl SeaOrmStorage {
    pub(super) async fn create_course_impl(&self, request: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let model = courses::ActiveModel {
            course_code: Set(request.course_code),
            course_name: Set(request.course_name),
            semester: Set(request.semester),
            lecturer_id: Set(request.lecturer_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(self.conn()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
                TrackerError::validation("referenced lecturer does not exist".to_string())
            } else {
                TrackerError::database_operation(e.to_string())
            }
        })?;
        Ok(inserted.into_course())
    }

    pub(super) async fn get_course_impl(&self, id: i64) -> Result<Option<Course>> {
        let found = courses::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(found.map(|m| m.into_course()))
    }

    pub(super) async fn list_courses_impl(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        let mut finder = courses::Entity::find().order_by_asc(courses::Column::CourseCode);

        if let Some(semester) = query.semester {
            finder = finder.filter(courses::Column::Semester.eq(semester));
        }
        if let Some(lecturer_id) = query.lecturer_id {
            finder = finder.filter(courses::Column::LecturerId.eq(lecturer_id));
        }

        let rows = finder
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(rows.into_iter().map(|m| m.into_course()).collect())
    }

    pub(super) async fn update_course_impl(
        &self,
        id: i64,
        request: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let Some(existing) = courses::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut model: courses::ActiveModel = existing.into();
        if let Some(course_code) = request.course_code {
            model.course_code = Set(course_code);
        }
        if let Some(course_name) = request.course_name {
            model.course_name = Set(course_name);
        }
        if let Some(semester) = request.semester {
            model.semester = Set(semester);
        }
        if let Some(lecturer_id) = request.lecturer_id {
            model.lecturer_id = Set(lecturer_id);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model.update(self.conn()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
                TrackerError::validation("referenced lecturer does not exist".to_string())
            } else {
                TrackerError::database_operation(e.to_string())
            }
        })?;
        Ok(Some(updated.into_course()))
    }

    /// 删除课程，其作业与提交由外键级联删除
    pub(super) async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = courses::Entity::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}
