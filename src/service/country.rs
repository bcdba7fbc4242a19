use sea_orm::DatabaseConnection;

use crate::data::country::CountryRepository;
use crate::dto::country::CountryDto;
use crate::error::AppError;
use crate::model::country::{Country, CountryParams};

pub struct CountryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CountryDto) -> Result<Country, AppError> {
        dto.validate()?;
        let params = CountryParams::from_dto(dto);

        let repository = CountryRepository::new(self.db);
        if repository.get_by_code(&params.code).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Country with code {} already exists",
                params.code
            )));
        }

        let country = repository.create(params).await?;

        Ok(Country::from_entity(country))
    }

    pub async fn get_all(&self) -> Result<Vec<Country>, AppError> {
        let countries = CountryRepository::new(self.db).get_all().await?;

        Ok(countries.into_iter().map(Country::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Country, AppError> {
        let country = CountryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Country with ID {id} not found"
            )))?;

        Ok(Country::from_entity(country))
    }

    pub async fn update(&self, id: i32, dto: CountryDto) -> Result<Country, AppError> {
        dto.validate()?;
        let params = CountryParams::from_dto(dto);

        let repository = CountryRepository::new(self.db);

        // Uniqueness is checked before existence, ignoring the row being
        // updated itself.
        if let Some(existing) = repository.get_by_code(&params.code).await? {
            if existing.id != id {
                return Err(AppError::BadRequest(format!(
                    "Country with code {} already exists",
                    params.code
                )));
            }
        }

        repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Country with ID {id} not found"
            )))?;

        let country = repository.update(id, params).await?;

        Ok(Country::from_entity(country))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        CountryRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
