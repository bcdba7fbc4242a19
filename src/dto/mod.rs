//! Wire-level request payloads and shared API types.
//!
//! Each resource has a request DTO mirroring the JSON body accepted by its
//! endpoints. DTOs validate their own fields and report one message per
//! failing field; cross-entity rules (uniqueness, foreign keys, booking
//! conflicts) are enforced by the service layer.

pub mod aircraft;
pub mod aircraft_assignment;
pub mod airport;
pub mod api;
pub mod city;
pub mod country;
pub mod department;
pub mod employee;
pub mod employee_assignment;
pub mod flight;
pub mod job;
