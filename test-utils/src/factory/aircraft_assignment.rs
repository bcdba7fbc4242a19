//! Aircraft assignment factory for seeding assignment rows directly.
//!
//! Assignments carry no data beyond their composite key, so the factory is a
//! single function rather than a builder.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an aircraft assignment row for the given key.
///
/// The referenced aircraft and flight must already exist; use
/// `factory::aircraft::create_aircraft` and
/// `factory::helpers::create_flight_with_dependencies` to seed them.
///
/// # Arguments
/// - `db` - Database connection
/// - `aircraft_id` - ID of the assigned aircraft
/// - `flight_id` - ID of the flight
/// - `date` - Calendar date of the assignment
///
/// # Returns
/// - `Ok(entity::aircraft_assignment::Model)` - Created assignment row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_aircraft_assignment(
    db: &DatabaseConnection,
    aircraft_id: i32,
    flight_id: i32,
    date: NaiveDate,
) -> Result<entity::aircraft_assignment::Model, DbErr> {
    entity::aircraft_assignment::ActiveModel {
        aircraft_id: ActiveValue::Set(aircraft_id),
        flight_id: ActiveValue::Set(flight_id),
        date: ActiveValue::Set(date),
    }
    .insert(db)
    .await
}
