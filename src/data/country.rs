use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::country::CountryParams;

pub struct CountryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CountryParams) -> Result<entity::country::Model, DbErr> {
        entity::country::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .order_by_asc(entity::country::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find_by_id(id).one(self.db).await
    }

    /// Looks up a country by its two-letter code for uniqueness checks.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .filter(entity::country::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: CountryParams,
    ) -> Result<entity::country::Model, DbErr> {
        let country = entity::prelude::Country::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Country with id {id} not found"
            )))?;

        let mut active_model: entity::country::ActiveModel = country.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.code = ActiveValue::Set(params.code);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Country::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
