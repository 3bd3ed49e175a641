//! 讲师存储操作

use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use super::SeaOrmStorage;
use crate::entity::lecturers;
use crate::errors::{Result, TrackerError};
use crate::models::lecturers::entities::Lecturer;
use crate::models::lecturers::requests::{CreateLecturerRequest, UpdateLecturerRequest};

impl SeaOrmStorage {
    pub(super) async fn create_lecturer_impl(
        &self,
        request: CreateLecturerRequest,
    ) -> Result<Lecturer> {
        let now = chrono::Utc::now().timestamp();
        let model = lecturers::ActiveModel {
            name: Set(request.name),
            email: Set(request.email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(inserted.into_lecturer())
    }

    pub(super) async fn get_lecturer_impl(&self, id: i64) -> Result<Option<Lecturer>> {
        let found = lecturers::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(found.map(|m| m.into_lecturer()))
    }

    pub(super) async fn list_lecturers_impl(&self) -> Result<Vec<Lecturer>> {
        let rows = lecturers::Entity::find()
            .order_by_asc(lecturers::Column::Name)
            .all(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(rows.into_iter().map(|m| m.into_lecturer()).collect())
    }

    pub(super) async fn update_lecturer_impl(
        &self,
        id: i64,
        request: UpdateLecturerRequest,
    ) -> Result<Option<Lecturer>> {
        let Some(existing) = lecturers::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut model: lecturers::ActiveModel = existing.into();
        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if let Some(email) = request.email {
            model.email = Set(Some(email));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(Some(updated.into_lecturer()))
    }

    /// 删除讲师，其课程、作业与提交由外键级联删除
    pub(super) async fn delete_lecturer_impl(&self, id: i64) -> Result<bool> {
        let result = lecturers::Entity::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(|e| TrackerError::database_operation(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}
