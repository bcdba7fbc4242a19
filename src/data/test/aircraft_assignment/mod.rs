use crate::data::aircraft_assignment::AircraftAssignmentRepository;
use crate::model::aircraft_assignment::AircraftAssignmentParams;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_assigned_dates;
mod get_by_aircraft_and_range;
mod is_assigned_on;
mod update;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}
