//! Domain models returned by the API and parameter structs consumed by the
//! data layer.
//!
//! Response models nest their foreign-key relations the way clients expect
//! them (a city carries its country, an airport its city, and so on). The
//! `*Relations` bundles are assembled by the repositories and converted here.

pub mod aircraft;
pub mod aircraft_assignment;
pub mod airport;
pub mod city;
pub mod country;
pub mod department;
pub mod employee;
pub mod employee_assignment;
pub mod flight;
pub mod job;
