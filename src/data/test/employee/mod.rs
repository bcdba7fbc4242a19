use crate::data::employee::EmployeeRepository;
use crate::model::employee::EmployeeParams;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_available_on;
mod get_by_email;
mod update;
