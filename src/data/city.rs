use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::city::{CityParams, CityRelations};

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new city and returns it with its related country.
    pub async fn create(&self, params: CityParams) -> Result<CityRelations, DbErr> {
        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(params.name),
            country_id: ActiveValue::Set(params.country_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(city.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "City with id {} not found after creation",
                city.id
            )))
    }

    pub async fn get_all(&self) -> Result<Vec<CityRelations>, DbErr> {
        let cities = entity::prelude::City::find()
            .find_also_related(entity::prelude::Country)
            .order_by_asc(entity::city::Column::Id)
            .all(self.db)
            .await?;

        cities.into_iter().map(into_relations).collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CityRelations>, DbErr> {
        let result = entity::prelude::City::find_by_id(id)
            .find_also_related(entity::prelude::Country)
            .one(self.db)
            .await?;

        result.map(into_relations).transpose()
    }

    pub async fn update(&self, id: i32, params: CityParams) -> Result<CityRelations, DbErr> {
        let city = entity::prelude::City::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("City with id {id} not found")))?;

        let mut active_model: entity::city::ActiveModel = city.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.country_id = ActiveValue::Set(params.country_id);

        let updated = active_model.update(self.db).await?;

        self.get_by_id(updated.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "City with id {} not found after update",
                updated.id
            )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::City::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

fn into_relations(
    (city, country): (entity::city::Model, Option<entity::country::Model>),
) -> Result<CityRelations, DbErr> {
    let country = country.ok_or(DbErr::RecordNotFound(format!(
        "Country for city with id {} not found",
        city.id
    )))?;

    Ok(CityRelations { city, country })
}
