//! Flight factory for creating test flight entities.

use crate::factory::helpers::next_id;
use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// Flights reference two airports, so the factory takes both airport ids up
/// front and fills the remaining fields with defaults.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db, departure.id, arrival.id)
///     .number("SB1234")
///     .distance(8000)
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    number: String,
    departure_airport_id: i32,
    arrival_airport_id: i32,
    departure_time: NaiveTime,
    arrival_time: NaiveTime,
    distance: i32,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - number: `"SB{id}"` padded to four digits, unique per call
    /// - departure_time: `08:00`, arrival_time: `11:30`
    /// - distance: `1200`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `departure_airport_id` - ID of the departure airport
    /// - `arrival_airport_id` - ID of the arrival airport
    ///
    /// # Returns
    /// - `FlightFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        departure_airport_id: i32,
        arrival_airport_id: i32,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            number: format!("SB{:04}", id),
            departure_airport_id,
            arrival_airport_id,
            departure_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            distance: 1200,
        }
    }

    /// Sets the flight number.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the scheduled departure time.
    pub fn departure_time(mut self, departure_time: NaiveTime) -> Self {
        self.departure_time = departure_time;
        self
    }

    /// Sets the scheduled arrival time.
    pub fn arrival_time(mut self, arrival_time: NaiveTime) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the route distance in kilometers.
    pub fn distance(mut self, distance: i32) -> Self {
        self.distance = distance;
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            number: ActiveValue::Set(self.number),
            departure_airport_id: ActiveValue::Set(self.departure_airport_id),
            arrival_airport_id: ActiveValue::Set(self.arrival_airport_id),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.arrival_time),
            distance: ActiveValue::Set(self.distance),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values between the given airports.
///
/// Shorthand for `FlightFactory::new(db, departure_airport_id, arrival_airport_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `departure_airport_id` - ID of the departure airport
/// - `arrival_airport_id` - ID of the arrival airport
///
/// # Returns
/// - `Ok(entity::flight::Model)` - Created flight entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_flight(
    db: &DatabaseConnection,
    departure_airport_id: i32,
    arrival_airport_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, departure_airport_id, arrival_airport_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_flight_with_dependencies;

    #[tokio::test]
    async fn creates_flight_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_flight_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, departure, arrival, flight) = create_flight_with_dependencies(db).await?;

        assert_eq!(flight.departure_airport_id, departure.id);
        assert_eq!(flight.arrival_airport_id, arrival.id);
        assert!(flight.distance > 0);

        Ok(())
    }
}
