use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::airport::AirportRelations;
use crate::model::flight::{FlightParams, FlightRelations};

pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new flight and returns it with both endpoint airports
    /// resolved.
    pub async fn create(&self, params: FlightParams) -> Result<FlightRelations, DbErr> {
        let flight = entity::flight::ActiveModel {
            number: ActiveValue::Set(params.number),
            departure_airport_id: ActiveValue::Set(params.departure_airport_id),
            arrival_airport_id: ActiveValue::Set(params.arrival_airport_id),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            distance: ActiveValue::Set(params.distance),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(flight.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Flight with id {} not found after creation",
                flight.id
            )))
    }

    pub async fn get_all(&self) -> Result<Vec<FlightRelations>, DbErr> {
        let flights = entity::prelude::Flight::find()
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(flights).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightRelations>, DbErr> {
        let flight = entity::prelude::Flight::find_by_id(id).one(self.db).await?;

        match flight {
            Some(flight) => Ok(self.load_relations(vec![flight]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    /// Looks up a flight by number for uniqueness checks.
    pub async fn get_by_number(&self, number: &str) -> Result<Option<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find()
            .filter(entity::flight::Column::Number.eq(number))
            .one(self.db)
            .await
    }

    pub async fn update(&self, id: i32, params: FlightParams) -> Result<FlightRelations, DbErr> {
        let flight = entity::prelude::Flight::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Flight with id {id} not found"
            )))?;

        let mut active_model: entity::flight::ActiveModel = flight.into();
        active_model.number = ActiveValue::Set(params.number);
        active_model.departure_airport_id = ActiveValue::Set(params.departure_airport_id);
        active_model.arrival_airport_id = ActiveValue::Set(params.arrival_airport_id);
        active_model.departure_time = ActiveValue::Set(params.departure_time);
        active_model.arrival_time = ActiveValue::Set(params.arrival_time);
        active_model.distance = ActiveValue::Set(params.distance);

        let updated = active_model.update(self.db).await?;

        self.get_by_id(updated.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Flight with id {} not found after update",
                updated.id
            )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Flight::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Resolves both airports and their location chains for each flight with
    /// one batched query per table.
    pub async fn load_relations(
        &self,
        flights: Vec<entity::flight::Model>,
    ) -> Result<Vec<FlightRelations>, DbErr> {
        if flights.is_empty() {
            return Ok(Vec::new());
        }

        let mut airport_ids: Vec<i32> = Vec::new();
        airport_ids.extend(flights.iter().map(|f| f.departure_airport_id));
        airport_ids.extend(flights.iter().map(|f| f.arrival_airport_id));

        let airports_map: HashMap<i32, entity::airport::Model> = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.is_in(airport_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let city_ids: Vec<i32> = airports_map.values().map(|a| a.city_id).collect();
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

        let resolve_airport = |airport_id: i32| -> Result<AirportRelations, DbErr> {
            let airport = airports_map
                .get(&airport_id)
                .cloned()
                .ok_or(DbErr::RecordNotFound(format!(
                    "Airport with id {airport_id} not found"
                )))?;
            let city = cities_map
                .get(&airport.city_id)
                .cloned()
                .ok_or(DbErr::RecordNotFound(format!(
                    "City for airport with id {} not found",
                    airport.id
                )))?;
            let country = countries_map
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
        };

        flights
            .into_iter()
            .map(|flight| {
                let departure_airport = resolve_airport(flight.departure_airport_id)?;
                let arrival_airport = resolve_airport(flight.arrival_airport_id)?;

                Ok(FlightRelations {
                    flight,
                    departure_airport,
                    arrival_airport,
                })
            })
            .collect()
    }
}
