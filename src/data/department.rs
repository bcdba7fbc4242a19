use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::department::DepartmentParams;

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: DepartmentParams,
    ) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::department::Model>, DbErr> {
        entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: DepartmentParams,
    ) -> Result<entity::department::Model, DbErr> {
        let department = entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Department with id {id} not found"
            )))?;

        let mut active_model: entity::department::ActiveModel = department.into();
        active_model.name = ActiveValue::Set(params.name);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Department::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
