use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000005_create_jobs_table::Job;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string(Employee::FirstName))
                    .col(string(Employee::LastName))
                    .col(string(Employee::PhoneNumber))
                    .col(string(Employee::Email))
                    .col(integer(Employee::Salary))
                    .col(integer(Employee::JobId))
                    .col(integer_null(Employee::FlightHours))
                    .col(integer_null(Employee::ManagerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_job_id")
                            .from(Employee::Table, Employee::JobId)
                            .to(Job::Table, Job::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_manager_id")
                            .from(Employee::Table, Employee::ManagerId)
                            .to(Employee::Table, Employee::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    #[sea_orm(iden = "employees")]
    Table,
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Salary,
    JobId,
    FlightHours,
    ManagerId,
}
