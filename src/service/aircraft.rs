use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::aircraft::AircraftRepository;
use crate::data::aircraft_assignment::AircraftAssignmentRepository;
use crate::dto::aircraft::AircraftDto;
use crate::error::AppError;
use crate::model::aircraft::{Aircraft, AircraftParams};

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: AircraftDto) -> Result<Aircraft, AppError> {
        dto.validate()?;
        let params = AircraftParams::from_dto(dto);

        let repository = AircraftRepository::new(self.db);
        if repository
            .get_by_registration(&params.registration)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "Aircraft with registration {} already exists",
                params.registration
            )));
        }

        let aircraft = repository.create(params).await?;

        Ok(Aircraft::from_entity(aircraft))
    }

    pub async fn get_all(&self) -> Result<Vec<Aircraft>, AppError> {
        let aircraft = AircraftRepository::new(self.db).get_all().await?;

        Ok(aircraft.into_iter().map(Aircraft::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Aircraft, AppError> {
        let aircraft = AircraftRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Aircraft with ID {id} not found"
            )))?;

        Ok(Aircraft::from_entity(aircraft))
    }

    /// Gets aircraft with no assignment on the given date.
    pub async fn get_available_by_date(&self, date: NaiveDate) -> Result<Vec<Aircraft>, AppError> {
        let aircraft = AircraftRepository::new(self.db)
            .get_available_on(date)
            .await?;

        Ok(aircraft.into_iter().map(Aircraft::from_entity).collect())
    }

    /// Gets the dates within `[start, end]` on which the aircraft has no
    /// assignment, in chronological order.
    pub async fn get_availabilities(
        &self,
        id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AppError> {
        let assigned = AircraftAssignmentRepository::new(self.db)
            .get_assigned_dates(id, start, end)
            .await?;

        Ok(start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| !assigned.contains(date))
            .collect())
    }

    pub async fn update(&self, id: i32, dto: AircraftDto) -> Result<Aircraft, AppError> {
        dto.validate()?;
        let params = AircraftParams::from_dto(dto);

        let repository = AircraftRepository::new(self.db);

        if let Some(existing) = repository.get_by_registration(&params.registration).await? {
            if existing.id != id {
                return Err(AppError::BadRequest(format!(
                    "Aircraft with registration {} already exists",
                    params.registration
                )));
            }
        }

        repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Aircraft with ID {id} not found"
            )))?;

        let aircraft = repository.update(id, params).await?;

        Ok(Aircraft::from_entity(aircraft))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        AircraftRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
