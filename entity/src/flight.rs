use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub number: String,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub departure_time: Time,
    pub arrival_time: Time,
    pub distance: i32,
}

// Two foreign keys into the same table, so no `Related<airport::Entity>`
// impl; the airports are resolved with explicit queries instead.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::DepartureAirportId",
        to = "super::airport::Column::Id"
    )]
    DepartureAirport,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::ArrivalAirportId",
        to = "super::airport::Column::Id"
    )]
    ArrivalAirport,
}

impl ActiveModelBehavior for ActiveModel {}
