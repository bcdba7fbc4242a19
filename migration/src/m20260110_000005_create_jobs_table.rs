use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000004_create_departments_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(string(Job::Title))
                    .col(double(Job::MinSalary))
                    .col(double(Job::MaxSalary))
                    .col(integer(Job::DepartmentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_department_id")
                            .from(Job::Table, Job::DepartmentId)
                            .to(Department::Table, Department::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    #[sea_orm(iden = "jobs")]
    Table,
    Id,
    Title,
    MinSalary,
    MaxSalary,
    DepartmentId,
}
