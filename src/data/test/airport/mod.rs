use crate::data::airport::AirportRepository;
use crate::model::airport::AirportParams;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_id;
mod update;
