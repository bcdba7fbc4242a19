use sea_orm::DatabaseConnection;

use crate::data::airport::AirportRepository;
use crate::data::city::CityRepository;
use crate::dto::airport::AirportDto;
use crate::error::AppError;
use crate::model::airport::{Airport, AirportParams};

pub struct AirportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: AirportDto) -> Result<Airport, AppError> {
        dto.validate()?;
        let params = AirportParams::from_dto(dto);

        let repository = AirportRepository::new(self.db);
        if repository.get_by_code(&params.code).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Airport with code {} already exists",
                params.code
            )));
        }

        self.validate_city_exists(params.city_id).await?;

        let airport = repository.create(params).await?;

        Ok(Airport::from_relations(airport))
    }

    pub async fn get_all(&self) -> Result<Vec<Airport>, AppError> {
        let airports = AirportRepository::new(self.db).get_all().await?;

        Ok(airports.into_iter().map(Airport::from_relations).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Airport, AppError> {
        let airport = AirportRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Airport with ID {id} not found"
            )))?;

        Ok(Airport::from_relations(airport))
    }

    pub async fn update(&self, id: i32, dto: AirportDto) -> Result<Airport, AppError> {
        dto.validate()?;
        let params = AirportParams::from_dto(dto);

        let repository = AirportRepository::new(self.db);

        if let Some(existing) = repository.get_by_code(&params.code).await? {
            if existing.id != id {
                return Err(AppError::BadRequest(format!(
                    "Airport with code {} already exists",
                    params.code
                )));
            }
        }

        repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Airport with ID {id} not found"
            )))?;

        self.validate_city_exists(params.city_id).await?;

        let airport = repository.update(id, params).await?;

        Ok(Airport::from_relations(airport))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        AirportRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn validate_city_exists(&self, city_id: i32) -> Result<(), AppError> {
        CityRepository::new(self.db)
            .get_by_id(city_id)
            .await?
            .ok_or(AppError::BadRequest(format!(
                "City with ID {city_id} does not exist"
            )))?;

        Ok(())
    }
}
