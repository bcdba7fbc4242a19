use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::aircraft::AircraftRepository;
use crate::data::aircraft_assignment::{AircraftAssignmentKey, AircraftAssignmentRepository};
use crate::data::flight::FlightRepository;
use crate::dto::aircraft_assignment::AircraftAssignmentDto;
use crate::error::AppError;
use crate::model::aircraft_assignment::{AircraftAssignment, AircraftAssignmentParams};

pub struct AircraftAssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftAssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: AircraftAssignmentDto) -> Result<AircraftAssignment, AppError> {
        dto.validate()?;
        let params = AircraftAssignmentParams::from_dto(dto);

        let aircraft = AircraftRepository::new(self.db)
            .get_by_id(params.aircraft_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Aircraft with ID {} not found",
                params.aircraft_id
            )))?;
        let flight = FlightRepository::new(self.db)
            .get_by_id(params.flight_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Flight with ID {} not found",
                params.flight_id
            )))?;

        let repository = AircraftAssignmentRepository::new(self.db);
        if repository
            .is_assigned_on(params.aircraft_id, params.date)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Aircraft with ID {} is not available on {}",
                params.aircraft_id, params.date
            )));
        }

        validate_aircraft_range(aircraft.range, flight.flight.distance)?;

        let assignment = repository.create(params).await?;

        Ok(AircraftAssignment::from_relations(assignment))
    }

    pub async fn get_all(&self) -> Result<Vec<AircraftAssignment>, AppError> {
        let assignments = AircraftAssignmentRepository::new(self.db).get_all().await?;

        Ok(assignments
            .into_iter()
            .map(AircraftAssignment::from_relations)
            .collect())
    }

    pub async fn get_by_id(&self, id: AircraftAssignmentKey) -> Result<AircraftAssignment, AppError> {
        let assignment = AircraftAssignmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(AircraftAssignment::from_relations(assignment))
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<AircraftAssignment>, AppError> {
        let assignments = AircraftAssignmentRepository::new(self.db)
            .get_by_date(date)
            .await?;

        Ok(assignments
            .into_iter()
            .map(AircraftAssignment::from_relations)
            .collect())
    }

    pub async fn get_by_aircraft_and_date_range(
        &self,
        aircraft_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AircraftAssignment>, AppError> {
        let assignments = AircraftAssignmentRepository::new(self.db)
            .get_by_aircraft_and_range(aircraft_id, start, end)
            .await?;

        Ok(assignments
            .into_iter()
            .map(AircraftAssignment::from_relations)
            .collect())
    }

    pub async fn get_by_flight_and_date_range(
        &self,
        flight_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AircraftAssignment>, AppError> {
        let assignments = AircraftAssignmentRepository::new(self.db)
            .get_by_flight_and_range(flight_id, start, end)
            .await?;

        Ok(assignments
            .into_iter()
            .map(AircraftAssignment::from_relations)
            .collect())
    }

    /// Re-keys an assignment. Availability and range are re-validated in
    /// full, with the row being updated excluded from the conflict check so
    /// it cannot collide with itself.
    pub async fn update(
        &self,
        id: AircraftAssignmentKey,
        dto: AircraftAssignmentDto,
    ) -> Result<AircraftAssignment, AppError> {
        dto.validate()?;
        let params = AircraftAssignmentParams::from_dto(dto);

        let repository = AircraftAssignmentRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let aircraft = AircraftRepository::new(self.db)
            .get_by_id(params.aircraft_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Aircraft with ID {} not found",
                params.aircraft_id
            )))?;
        let flight = FlightRepository::new(self.db)
            .get_by_id(params.flight_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Flight with ID {} not found",
                params.flight_id
            )))?;

        if repository
            .is_assigned_on_excluding(params.aircraft_id, params.date, id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Aircraft with ID {} is not available on {}",
                params.aircraft_id, params.date
            )));
        }

        validate_aircraft_range(aircraft.range, flight.flight.distance)?;

        let assignment = repository.update(id, params).await?;

        Ok(AircraftAssignment::from_relations(assignment))
    }

    pub async fn delete(&self, id: AircraftAssignmentKey) -> Result<(), AppError> {
        AircraftAssignmentRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}

fn validate_aircraft_range(range: i32, distance: i32) -> Result<(), AppError> {
    if range < distance {
        return Err(AppError::BadRequest(
            "Aircraft range is not enough for this flight".to_string(),
        ));
    }

    Ok(())
}

fn not_found(id: AircraftAssignmentKey) -> AppError {
    AppError::NotFound(format!(
        "AircraftAssignment with ID ({}, {}, {}) not found",
        id.0, id.1, id.2
    ))
}
