//! HTTP request handlers, one module per resource group.

use chrono::NaiveDate;
use serde::Deserialize;

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

/// Single-date query string (`?date=2024-06-01`).
#[derive(Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

/// Inclusive date-range query string (`?startDate=...&endDate=...`).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
