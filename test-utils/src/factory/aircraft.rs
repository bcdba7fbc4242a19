//! Aircraft factory for creating test aircraft entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test aircraft with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::aircraft::AircraftFactory;
///
/// let aircraft = AircraftFactory::new(&db)
///     .registration("G-ABCD")
///     .range(400)
///     .build()
///     .await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    registration: String,
    aircraft_type: String,
    range: i32,
    capacity: i32,
}

impl<'a> AircraftFactory<'a> {
    /// Creates a new AircraftFactory with default values.
    ///
    /// Defaults:
    /// - registration: `"N{id}"` padded to five digits, unique per call
    /// - aircraft_type: `"A320"`
    /// - range: `6000`
    /// - capacity: `180`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AircraftFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            registration: format!("N{:05}", id),
            aircraft_type: "A320".to_string(),
            range: 6000,
            capacity: 180,
        }
    }

    /// Sets the registration for the aircraft.
    pub fn registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = registration.into();
        self
    }

    /// Sets the type designation for the aircraft.
    pub fn aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = aircraft_type.into();
        self
    }

    /// Sets the range in kilometers for the aircraft.
    pub fn range(mut self, range: i32) -> Self {
        self.range = range;
        self
    }

    /// Sets the seating capacity for the aircraft.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the aircraft entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::aircraft::Model)` - Created aircraft entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        entity::aircraft::ActiveModel {
            id: ActiveValue::NotSet,
            registration: ActiveValue::Set(self.registration),
            aircraft_type: ActiveValue::Set(self.aircraft_type),
            range: ActiveValue::Set(self.range),
            capacity: ActiveValue::Set(self.capacity),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an aircraft with default values.
///
/// Shorthand for `AircraftFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::aircraft::Model)` - Created aircraft entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_aircraft(db: &DatabaseConnection) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db).build().await
}
