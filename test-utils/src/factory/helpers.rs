//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Encodes a counter value as an uppercase letter code of the given length.
///
/// Used for unique country and airport codes, which have fixed-length
/// alphabetic formats. The value is written in base 26 with `A` as zero,
/// left-padded to `len` characters, so distinct counter values below
/// `26^len` yield distinct codes.
///
/// # Arguments
/// - `id` - Counter value to encode
/// - `len` - Number of characters in the resulting code
///
/// # Returns
/// - `String` - Uppercase alphabetic code of length `len`
pub fn letter_code(mut id: u64, len: usize) -> String {
    let mut chars = vec![b'A'; len];
    for slot in chars.iter_mut().rev() {
        *slot = b'A' + (id % 26) as u8;
        id /= 26;
    }
    String::from_utf8(chars).unwrap()
}

/// Creates an airport with its geographic dependencies.
///
/// This is a convenience method that creates:
/// 1. Country
/// 2. City
/// 3. Airport
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((country, city, airport))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_airport_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::country::Model,
        entity::city::Model,
        entity::airport::Model,
    ),
    DbErr,
> {
    let country = crate::factory::country::create_country(db).await?;
    let city = crate::factory::city::create_city(db, country.id).await?;
    let airport = crate::factory::airport::create_airport(db, city.id).await?;

    Ok((country, city, airport))
}

/// Creates a flight with its full route.
///
/// This is a convenience method that creates:
/// 1. Country
/// 2. City
/// 3. Two airports in that city (departure and arrival)
/// 4. Flight between the two airports
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((country, city, departure, arrival, flight))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::country::Model,
        entity::city::Model,
        entity::airport::Model,
        entity::airport::Model,
        entity::flight::Model,
    ),
    DbErr,
> {
    let country = crate::factory::country::create_country(db).await?;
    let city = crate::factory::city::create_city(db, country.id).await?;
    let departure = crate::factory::airport::create_airport(db, city.id).await?;
    let arrival = crate::factory::airport::create_airport(db, city.id).await?;
    let flight = crate::factory::flight::create_flight(db, departure.id, arrival.id).await?;

    Ok((country, city, departure, arrival, flight))
}

/// Creates an employee with job and department dependencies.
///
/// This creates a department, a job in that department, and an employee
/// holding that job, all with default values. Useful when the test only
/// cares about the employee itself.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((department, job, employee))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_employee_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::department::Model,
        entity::job::Model,
        entity::employee::Model,
    ),
    DbErr,
> {
    let department = crate::factory::department::create_department(db).await?;
    let job = crate::factory::job::create_job(db, department.id).await?;
    let employee = crate::factory::employee::create_employee(db, job.id).await?;

    Ok((department, job, employee))
}

#[cfg(test)]
mod tests {
    use super::letter_code;

    #[test]
    fn encodes_fixed_length_codes() {
        assert_eq!(letter_code(0, 2), "AA");
        assert_eq!(letter_code(1, 3), "AAB");
        assert_eq!(letter_code(27, 2), "BB");
    }
}
