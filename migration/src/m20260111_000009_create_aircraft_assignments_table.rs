use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260111_000007_create_aircraft_table::Aircraft,
    m20260111_000008_create_flights_table::Flight,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AircraftAssignment::Table)
                    .if_not_exists()
                    .col(integer(AircraftAssignment::AircraftId))
                    .col(integer(AircraftAssignment::FlightId))
                    .col(date(AircraftAssignment::Date))
                    .primary_key(
                        Index::create()
                            .col(AircraftAssignment::AircraftId)
                            .col(AircraftAssignment::FlightId)
                            .col(AircraftAssignment::Date),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircraft_assignment_aircraft_id")
                            .from(AircraftAssignment::Table, AircraftAssignment::AircraftId)
                            .to(Aircraft::Table, Aircraft::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircraft_assignment_flight_id")
                            .from(AircraftAssignment::Table, AircraftAssignment::FlightId)
                            .to(Flight::Table, Flight::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AircraftAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AircraftAssignment {
    #[sea_orm(iden = "aircraft_assignments")]
    Table,
    AircraftId,
    FlightId,
    Date,
}
