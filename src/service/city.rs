use sea_orm::DatabaseConnection;

use crate::data::city::CityRepository;
use crate::data::country::CountryRepository;
use crate::dto::city::CityDto;
use crate::error::AppError;
use crate::model::city::{City, CityParams};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CityDto) -> Result<City, AppError> {
        dto.validate()?;
        let params = CityParams::from_dto(dto);

        self.validate_country_exists(params.country_id).await?;

        let city = CityRepository::new(self.db).create(params).await?;

        Ok(City::from_relations(city))
    }

    pub async fn get_all(&self) -> Result<Vec<City>, AppError> {
        let cities = CityRepository::new(self.db).get_all().await?;

        Ok(cities.into_iter().map(City::from_relations).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<City, AppError> {
        let city = CityRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("City with ID {id} not found")))?;

        Ok(City::from_relations(city))
    }

    pub async fn update(&self, id: i32, dto: CityDto) -> Result<City, AppError> {
        dto.validate()?;
        let params = CityParams::from_dto(dto);

        let repository = CityRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("City with ID {id} not found")))?;

        self.validate_country_exists(params.country_id).await?;

        let city = repository.update(id, params).await?;

        Ok(City::from_relations(city))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        CityRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn validate_country_exists(&self, country_id: i32) -> Result<(), AppError> {
        CountryRepository::new(self.db)
            .get_by_id(country_id)
            .await?
            .ok_or(AppError::BadRequest(format!(
                "Country with ID {country_id} does not exist"
            )))?;

        Ok(())
    }
}
