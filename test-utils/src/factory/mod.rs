//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let country = factory::country::create_country(&db).await?;
//!     let aircraft = factory::aircraft::create_aircraft(&db).await?;
//!
//!     // Create with all dependencies
//!     let (country, city, departure, arrival, flight) =
//!         factory::helpers::create_flight_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let aircraft = factory::aircraft::AircraftFactory::new(&db)
//!     .registration("G-ABCD")
//!     .range(400)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `country` - Create country entities
//! - `city` - Create city entities
//! - `airport` - Create airport entities
//! - `department` - Create department entities
//! - `job` - Create job entities
//! - `employee` - Create employee entities
//! - `aircraft` - Create aircraft entities
//! - `flight` - Create flight entities
//! - `aircraft_assignment` - Create aircraft-to-flight assignment rows
//! - `employee_assignment` - Create employee-to-flight assignment rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod aircraft;
pub mod aircraft_assignment;
pub mod airport;
pub mod city;
pub mod country;
pub mod department;
pub mod employee;
pub mod employee_assignment;
pub mod flight;
pub mod helpers;
pub mod job;

// Re-export commonly used factory functions for concise usage
pub use aircraft::create_aircraft;
pub use aircraft_assignment::create_aircraft_assignment;
pub use airport::create_airport;
pub use city::create_city;
pub use country::create_country;
pub use department::create_department;
pub use employee::create_employee;
pub use employee_assignment::create_employee_assignment;
pub use flight::create_flight;
pub use job::create_job;
