//! 学生存储操作

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr,
};
use tracing::debug;

use super::SeaOrmStorage;
use crate::entity::students;
use crate::errors::{Result, TrackerError};
use crate::models::students::entities::Student;
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::utils::registration::{latest_numeric, next_registration_number};
use crate::utils::sql::escape_like_pattern;

impl SeaOrmStorage {
    /// 创建学生，未显式指定学号时取数值最大学号加一
    ///
    /// 学号列是字符串，位数增长后字符串最大值不等于数值最大值，
    /// 因此取全部学号后在内存中按数值选最大。
    /// 并发创建时可能撞号，由学号唯一索引兜底，冲突以约束错误返回。
    pub(super) async fn create_student_impl(
        &self,
        request: CreateStudentRequest,
    ) -> Result<Student> {
        let explicit = request
            .student_number
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let student_number = match explicit {
            Some(number) => number,
            None => {
                let numbers: Vec<String> = students::Entity::find()
                    .select_only()
                    .column(students::Column::StudentNumber)
                    .into_tuple()
                    .all(self.conn())
                    .await
                    .map_err(|e| TrackerError::database_operation(e.to_string()))?;
                next_registration_number(latest_numeric(numbers.iter().map(String::as_str)))
            }
        };
        let now = chrono::Utc::now().timestamp();

        let model = students::ActiveModel {
            student_number: Set(student_number.clone()),
            name: Set(request.name),
            email: Set(request.email),
            photo_path: Set(request.photo_path),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(self.conn()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                TrackerError::constraint_violation(format!(
                    "student number {student_number} already exists"
                ))
            } else {
                TrackerError::database_operation(e.to_string())
            }
        })?;

        debug!("Student created: id={} number={}", inserted.id, inserted.student_number);
        Ok(inserted.into_student())
    }

    pub(super) async fn get_student_impl(&self, id: i64) -> Result<Option<Student>> {
        let found = students::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(found.map(|m| m.into_student()))
    }

    pub(super) async fn list_students_impl(&self, search: Option<String>) -> Result<Vec<Student>> {
        let mut query = students::Entity::find().order_by_asc(students::Column::StudentNumber);

        if let Some(keyword) = search.filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", escape_like_pattern(keyword.trim()));
            query = query.filter(
                Condition::any()
                    .add(students::Column::Name.like(&pattern))
                    .add(students::Column::StudentNumber.like(&pattern)),
            );
        }

        let rows = query
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(rows.into_iter().map(|m| m.into_student()).collect())
    }

    pub(super) async fn update_student_impl(
        &self,
        id: i64,
        request: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = students::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut model: students::ActiveModel = existing.into();
        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if let Some(email) = request.email {
            model.email = Set(Some(email));
        }
        if let Some(photo_path) = request.photo_path {
            model.photo_path = Set(Some(photo_path));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(Some(updated.into_student()))
    }

    /// 删除学生，其提交记录由外键级联删除
    pub(super) async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = students::Entity::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}
