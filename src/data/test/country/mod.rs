use crate::data::country::CountryRepository;
use crate::model::country::CountryParams;
use entity::prelude::Country;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
