//! Employee assignment factory for seeding assignment rows directly.
//!
//! Assignments carry no data beyond their composite key, so the factory is a
//! single function rather than a builder.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an employee assignment row for the given key.
///
/// The referenced employee and flight must already exist; use
/// `factory::helpers::create_employee_with_dependencies` and
/// `factory::helpers::create_flight_with_dependencies` to seed them.
///
/// # Arguments
/// - `db` - Database connection
/// - `employee_id` - ID of the assigned employee
/// - `flight_id` - ID of the flight
/// - `date` - Calendar date of the assignment
///
/// # Returns
/// - `Ok(entity::employee_assignment::Model)` - Created assignment row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_employee_assignment(
    db: &DatabaseConnection,
    employee_id: i32,
    flight_id: i32,
    date: NaiveDate,
) -> Result<entity::employee_assignment::Model, DbErr> {
    entity::employee_assignment::ActiveModel {
        employee_id: ActiveValue::Set(employee_id),
        flight_id: ActiveValue::Set(flight_id),
        date: ActiveValue::Set(date),
    }
    .insert(db)
    .await
}
