use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::data::flight::FlightRepository;
use crate::model::aircraft_assignment::{AircraftAssignmentParams, AircraftAssignmentRelations};
use crate::model::flight::FlightRelations;

/// Composite key identifying one assignment: (aircraft id, flight id, date).
pub type AircraftAssignmentKey = (i32, i32, NaiveDate);

pub struct AircraftAssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftAssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new assignment and returns it with aircraft and flight
    /// resolved.
    pub async fn create(
        &self,
        params: AircraftAssignmentParams,
    ) -> Result<AircraftAssignmentRelations, DbErr> {
        let assignment = entity::aircraft_assignment::ActiveModel {
            aircraft_id: ActiveValue::Set(params.aircraft_id),
            flight_id: ActiveValue::Set(params.flight_id),
            date: ActiveValue::Set(params.date),
        }
        .insert(self.db)
        .await?;

        let key = (assignment.aircraft_id, assignment.flight_id, assignment.date);
        self.get_by_id(key)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Aircraft assignment {key:?} not found after creation"
            )))
    }

    pub async fn get_all(&self) -> Result<Vec<AircraftAssignmentRelations>, DbErr> {
        let assignments = entity::prelude::AircraftAssignment::find()
            .order_by_asc(entity::aircraft_assignment::Column::Date)
            .order_by_asc(entity::aircraft_assignment::Column::AircraftId)
            .all(self.db)
            .await?;

        self.load_relations(assignments).await
    }

    pub async fn get_by_id(
        &self,
        id: AircraftAssignmentKey,
    ) -> Result<Option<AircraftAssignmentRelations>, DbErr> {
        let assignment = entity::prelude::AircraftAssignment::find_by_id(id)
            .one(self.db)
            .await?;

        match assignment {
            Some(assignment) => Ok(self
                .load_relations(vec![assignment])
                .await?
                .into_iter()
                .next()),
            None => Ok(None),
        }
    }

    pub async fn get_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AircraftAssignmentRelations>, DbErr> {
        let assignments = entity::prelude::AircraftAssignment::find()
            .filter(entity::aircraft_assignment::Column::Date.eq(date))
            .order_by_asc(entity::aircraft_assignment::Column::AircraftId)
            .all(self.db)
            .await?;

        self.load_relations(assignments).await
    }

    pub async fn get_by_aircraft_and_range(
        &self,
        aircraft_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AircraftAssignmentRelations>, DbErr> {
        let assignments = entity::prelude::AircraftAssignment::find()
            .filter(entity::aircraft_assignment::Column::AircraftId.eq(aircraft_id))
            .filter(entity::aircraft_assignment::Column::Date.between(start, end))
            .order_by_asc(entity::aircraft_assignment::Column::Date)
            .all(self.db)
            .await?;

        self.load_relations(assignments).await
    }

    pub async fn get_by_flight_and_range(
        &self,
        flight_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AircraftAssignmentRelations>, DbErr> {
        let assignments = entity::prelude::AircraftAssignment::find()
            .filter(entity::aircraft_assignment::Column::FlightId.eq(flight_id))
            .filter(entity::aircraft_assignment::Column::Date.between(start, end))
            .order_by_asc(entity::aircraft_assignment::Column::Date)
            .all(self.db)
            .await?;

        self.load_relations(assignments).await
    }

    /// Gets the dates within `[start, end]` on which the aircraft already has
    /// an assignment.
    pub async fn get_assigned_dates(
        &self,
        aircraft_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, DbErr> {
        let assignments = entity::prelude::AircraftAssignment::find()
            .filter(entity::aircraft_assignment::Column::AircraftId.eq(aircraft_id))
            .filter(entity::aircraft_assignment::Column::Date.between(start, end))
            .order_by_asc(entity::aircraft_assignment::Column::Date)
            .all(self.db)
            .await?;

        Ok(assignments.into_iter().map(|a| a.date).collect())
    }

    /// Checks whether the aircraft has any assignment on the given date.
    pub async fn is_assigned_on(&self, aircraft_id: i32, date: NaiveDate) -> Result<bool, DbErr> {
        let count = entity::prelude::AircraftAssignment::find()
            .filter(entity::aircraft_assignment::Column::AircraftId.eq(aircraft_id))
            .filter(entity::aircraft_assignment::Column::Date.eq(date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Same as [`Self::is_assigned_on`] but ignores one existing row, so an
    /// assignment being updated does not conflict with itself.
    pub async fn is_assigned_on_excluding(
        &self,
        aircraft_id: i32,
        date: NaiveDate,
        exclude: AircraftAssignmentKey,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::AircraftAssignment::find()
            .filter(entity::aircraft_assignment::Column::AircraftId.eq(aircraft_id))
            .filter(entity::aircraft_assignment::Column::Date.eq(date))
            .filter(
                Condition::any()
                    .add(entity::aircraft_assignment::Column::AircraftId.ne(exclude.0))
                    .add(entity::aircraft_assignment::Column::FlightId.ne(exclude.1))
                    .add(entity::aircraft_assignment::Column::Date.ne(exclude.2)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces an assignment under a new composite key. The delete and
    /// insert run in one transaction so the row never goes missing.
    pub async fn update(
        &self,
        id: AircraftAssignmentKey,
        params: AircraftAssignmentParams,
    ) -> Result<AircraftAssignmentRelations, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::AircraftAssignment::delete_by_id(id)
            .exec(&txn)
            .await?;

        entity::aircraft_assignment::ActiveModel {
            aircraft_id: ActiveValue::Set(params.aircraft_id),
            flight_id: ActiveValue::Set(params.flight_id),
            date: ActiveValue::Set(params.date),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        let key = (params.aircraft_id, params.flight_id, params.date);
        self.get_by_id(key)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Aircraft assignment {key:?} not found after update"
            )))
    }

    pub async fn delete(&self, id: AircraftAssignmentKey) -> Result<(), DbErr> {
        entity::prelude::AircraftAssignment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Resolves the aircraft and the full flight chain for each assignment
    /// with batched queries.
    async fn load_relations(
        &self,
        assignments: Vec<entity::aircraft_assignment::Model>,
    ) -> Result<Vec<AircraftAssignmentRelations>, DbErr> {
        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let aircraft_ids: Vec<i32> = assignments.iter().map(|a| a.aircraft_id).collect();
        let aircraft_map: HashMap<i32, entity::aircraft::Model> = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Id.is_in(aircraft_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let flight_ids: Vec<i32> = assignments.iter().map(|a| a.flight_id).collect();
        let flights = entity::prelude::Flight::find()
            .filter(entity::flight::Column::Id.is_in(flight_ids))
            .all(self.db)
            .await?;
        let flights_map: HashMap<i32, FlightRelations> = FlightRepository::new(self.db)
            .load_relations(flights)
            .await?
            .into_iter()
            .map(|f| (f.flight.id, f))
            .collect();

        assignments
            .into_iter()
            .map(|assignment| {
                let aircraft = aircraft_map
                    .get(&assignment.aircraft_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Aircraft with id {} not found",
                        assignment.aircraft_id
                    )))?;
                let flight = flights_map
                    .get(&assignment.flight_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Flight with id {} not found",
                        assignment.flight_id
                    )))?;

                Ok(AircraftAssignmentRelations {
                    assignment,
                    aircraft,
                    flight,
                })
            })
            .collect()
    }
}
