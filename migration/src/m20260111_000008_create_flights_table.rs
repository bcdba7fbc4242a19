use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000003_create_airports_table::Airport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(string_uniq(Flight::Number))
                    .col(integer(Flight::DepartureAirportId))
                    .col(integer(Flight::ArrivalAirportId))
                    .col(time(Flight::DepartureTime))
                    .col(time(Flight::ArrivalTime))
                    .col(integer(Flight::Distance))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_departure_airport_id")
                            .from(Flight::Table, Flight::DepartureAirportId)
                            .to(Airport::Table, Airport::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_arrival_airport_id")
                            .from(Flight::Table, Flight::ArrivalAirportId)
                            .to(Airport::Table, Airport::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    #[sea_orm(iden = "flights")]
    Table,
    Id,
    Number,
    DepartureAirportId,
    ArrivalAirportId,
    DepartureTime,
    ArrivalTime,
    Distance,
}
