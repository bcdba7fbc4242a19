//! City factory for creating test city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
///
/// Cities belong to a country, so the factory takes the owning country's id
/// up front and fills the remaining fields with defaults.
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    country_id: i32,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"City {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `country_id` - ID of the country the city belongs to
    ///
    /// # Returns
    /// - `CityFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, country_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("City {}", id),
            country_id,
        }
    }

    /// Sets the name for the city.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the city entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::city::Model)` - Created city entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            country_id: ActiveValue::Set(self.country_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values in the given country.
///
/// Shorthand for `CityFactory::new(db, country_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `country_id` - ID of the country the city belongs to
///
/// # Returns
/// - `Ok(entity::city::Model)` - Created city entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_city(
    db: &DatabaseConnection,
    country_id: i32,
) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db, country_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::country::create_country;

    #[tokio::test]
    async fn creates_city_in_country() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_location_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let country = create_country(db).await?;
        let city = create_city(db, country.id).await?;

        assert_eq!(city.country_id, country.id);
        assert!(!city.name.is_empty());

        Ok(())
    }
}
