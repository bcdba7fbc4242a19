use sea_orm::DatabaseConnection;

use crate::data::airport::AirportRepository;
use crate::data::flight::FlightRepository;
use crate::dto::flight::FlightDto;
use crate::error::AppError;
use crate::model::flight::{Flight, FlightParams};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: FlightDto) -> Result<Flight, AppError> {
        dto.validate()?;
        let params = FlightParams::from_dto(dto);

        let repository = FlightRepository::new(self.db);
        if repository.get_by_number(&params.number).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Flight with number {} already exists",
                params.number
            )));
        }

        self.validate_airport_exists(params.departure_airport_id)
            .await?;
        self.validate_airport_exists(params.arrival_airport_id)
            .await?;

        let flight = repository.create(params).await?;

        Ok(Flight::from_relations(flight))
    }

    pub async fn get_all(&self) -> Result<Vec<Flight>, AppError> {
        let flights = FlightRepository::new(self.db).get_all().await?;

        Ok(flights.into_iter().map(Flight::from_relations).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Flight, AppError> {
        let flight = FlightRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Flight with ID {id} not found")))?;

        Ok(Flight::from_relations(flight))
    }

    pub async fn update(&self, id: i32, dto: FlightDto) -> Result<Flight, AppError> {
        dto.validate()?;
        let params = FlightParams::from_dto(dto);

        let repository = FlightRepository::new(self.db);

        if let Some(existing) = repository.get_by_number(&params.number).await? {
            if existing.id != id {
                return Err(AppError::BadRequest(format!(
                    "Flight with number {} already exists",
                    params.number
                )));
            }
        }

        repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Flight with ID {id} not found")))?;

        self.validate_airport_exists(params.departure_airport_id)
            .await?;
        self.validate_airport_exists(params.arrival_airport_id)
            .await?;

        let flight = repository.update(id, params).await?;

        Ok(Flight::from_relations(flight))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        FlightRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn validate_airport_exists(&self, airport_id: i32) -> Result<(), AppError> {
        AirportRepository::new(self.db)
            .get_by_id(airport_id)
            .await?
            .ok_or(AppError::BadRequest(format!(
                "Airport with ID {airport_id} does not exist"
            )))?;

        Ok(())
    }
}
