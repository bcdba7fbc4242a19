use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::airport::{AirportParams, AirportRelations};

pub struct AirportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new airport and returns it with its city and country.
    pub async fn create(&self, params: AirportParams) -> Result<AirportRelations, DbErr> {
        let airport = entity::airport::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            city_id: ActiveValue::Set(params.city_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(airport.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Airport with id {} not found after creation",
                airport.id
            )))
    }

    pub async fn get_all(&self) -> Result<Vec<AirportRelations>, DbErr> {
        let airports = entity::prelude::Airport::find()
            .order_by_asc(entity::airport::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(airports).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AirportRelations>, DbErr> {
        let airport = entity::prelude::Airport::find_by_id(id).one(self.db).await?;

        match airport {
            Some(airport) => Ok(Some(
                self.load_relations(vec![airport])
                    .await?
                    .into_iter()
                    .next()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Airport with id {id} lost its location chain"
                    )))?,
            )),
            None => Ok(None),
        }
    }

    /// Looks up an airport by its three-letter code for uniqueness checks.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<entity::airport::Model>, DbErr> {
        entity::prelude::Airport::find()
            .filter(entity::airport::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    pub async fn update(&self, id: i32, params: AirportParams) -> Result<AirportRelations, DbErr> {
        let airport = entity::prelude::Airport::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Airport with id {id} not found"
            )))?;

        let mut active_model: entity::airport::ActiveModel = airport.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.code = ActiveValue::Set(params.code);
        active_model.city_id = ActiveValue::Set(params.city_id);

        let updated = active_model.update(self.db).await?;

        self.get_by_id(updated.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Airport with id {} not found after update",
                updated.id
            )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Airport::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Resolves the city and country for each airport with one batched query
    /// per table.
    pub async fn load_relations(
        &self,
        airports: Vec<entity::airport::Model>,
    ) -> Result<Vec<AirportRelations>, DbErr> {
        if airports.is_empty() {
            return Ok(Vec::new());
        }

        let city_ids: Vec<i32> = airports.iter().map(|a| a.city_id).collect();
        let cities_map: HashMap<i32, entity::city::Model> = entity::prelude::City::find()
            .filter(entity::city::Column::Id.is_in(city_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let country_ids: Vec<i32> = cities_map.values().map(|c| c.country_id).collect();
        let countries_map: HashMap<i32, entity::country::Model> = entity::prelude::Country::find()
            .filter(entity::country::Column::Id.is_in(country_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        airports
            .into_iter()
            .map(|airport| {
                let city = cities_map
                    .get(&airport.city_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "City for airport with id {} not found",
                        airport.id
                    )))?;
                let country =
                    countries_map
                        .get(&city.country_id)
                        .cloned()
                        .ok_or(DbErr::RecordNotFound(format!(
                            "Country for city with id {} not found",
                            city.id
                        )))?;

                Ok(AirportRelations {
                    airport,
                    city,
                    country,
                })
            })
            .collect()
    }
}
