//! Airport factory for creating test airport entities.

use crate::factory::helpers::{letter_code, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
///
/// Airports belong to a city, so the factory takes the owning city's id up
/// front and fills the remaining fields with defaults.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::airport::AirportFactory;
///
/// let airport = AirportFactory::new(&db, city.id)
///     .name("Humberto Delgado")
///     .code("LIS")
///     .build()
///     .await?;
/// ```
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    city_id: i32,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Airport {id}"` where id is auto-incremented
    /// - code: unique three-letter code derived from the id
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `city_id` - ID of the city the airport belongs to
    ///
    /// # Returns
    /// - `AirportFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Airport {}", id),
            code: letter_code(id, 3),
            city_id,
        }
    }

    /// Sets the name for the airport.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the three-letter code for the airport.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Builds and inserts the airport entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::airport::Model)` - Created airport entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            city_id: ActiveValue::Set(self.city_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport with default values in the given city.
///
/// Shorthand for `AirportFactory::new(db, city_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `city_id` - ID of the city the airport belongs to
///
/// # Returns
/// - `Ok(entity::airport::Model)` - Created airport entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_airport(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db, city_id).build().await
}
