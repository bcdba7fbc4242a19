use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use chrono::NaiveDate;

use crate::model::aircraft::AircraftParams;

pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: AircraftParams) -> Result<entity::aircraft::Model, DbErr> {
        entity::aircraft::ActiveModel {
            registration: ActiveValue::Set(params.registration),
            aircraft_type: ActiveValue::Set(params.aircraft_type),
            range: ActiveValue::Set(params.range),
            capacity: ActiveValue::Set(params.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::aircraft::Model>, DbErr> {
        entity::prelude::Aircraft::find()
            .order_by_asc(entity::aircraft::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::aircraft::Model>, DbErr> {
        entity::prelude::Aircraft::find_by_id(id).one(self.db).await
    }

    /// Looks up an aircraft by tail registration for uniqueness checks.
    pub async fn get_by_registration(
        &self,
        registration: &str,
    ) -> Result<Option<entity::aircraft::Model>, DbErr> {
        entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Registration.eq(registration))
            .one(self.db)
            .await
    }

    /// Gets aircraft with no assignment on the given date.
    pub async fn get_available_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<entity::aircraft::Model>, DbErr> {
        let busy = Query::select()
            .column(entity::aircraft_assignment::Column::AircraftId)
            .from(entity::aircraft_assignment::Entity)
            .and_where(entity::aircraft_assignment::Column::Date.eq(date))
            .to_owned();

        entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Id.not_in_subquery(busy))
            .order_by_asc(entity::aircraft::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: AircraftParams,
    ) -> Result<entity::aircraft::Model, DbErr> {
        let aircraft = entity::prelude::Aircraft::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Aircraft with id {id} not found"
            )))?;

        let mut active_model: entity::aircraft::ActiveModel = aircraft.into();
        active_model.registration = ActiveValue::Set(params.registration);
        active_model.aircraft_type = ActiveValue::Set(params.aircraft_type);
        active_model.range = ActiveValue::Set(params.range);
        active_model.capacity = ActiveValue::Set(params.capacity);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Aircraft::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
