use crate::data::flight::FlightRepository;
use crate::model::flight::FlightParams;
use chrono::NaiveTime;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_by_number;
mod update;
