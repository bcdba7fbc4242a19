use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000006_create_employees_table::Employee,
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
                    .table(EmployeeAssignment::Table)
                    .if_not_exists()
                    .col(integer(EmployeeAssignment::EmployeeId))
                    .col(integer(EmployeeAssignment::FlightId))
                    .col(date(EmployeeAssignment::Date))
                    .primary_key(
                        Index::create()
                            .col(EmployeeAssignment::EmployeeId)
                            .col(EmployeeAssignment::FlightId)
                            .col(EmployeeAssignment::Date),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_assignment_employee_id")
                            .from(EmployeeAssignment::Table, EmployeeAssignment::EmployeeId)
                            .to(Employee::Table, Employee::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_assignment_flight_id")
                            .from(EmployeeAssignment::Table, EmployeeAssignment::FlightId)
                            .to(Flight::Table, Flight::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeAssignment {
    #[sea_orm(iden = "employee_assignments")]
    Table,
    EmployeeId,
    FlightId,
    Date,
}
