pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_countries_table;
mod m20260110_000002_create_cities_table;
mod m20260110_000003_create_airports_table;
mod m20260110_000004_create_departments_table;
mod m20260110_000005_create_jobs_table;
mod m20260110_000006_create_employees_table;
mod m20260111_000007_create_aircraft_table;
mod m20260111_000008_create_flights_table;
mod m20260111_000009_create_aircraft_assignments_table;
mod m20260111_000010_create_employee_assignments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_countries_table::Migration),
            Box::new(m20260110_000002_create_cities_table::Migration),
            Box::new(m20260110_000003_create_airports_table::Migration),
            Box::new(m20260110_000004_create_departments_table::Migration),
            Box::new(m20260110_000005_create_jobs_table::Migration),
            Box::new(m20260110_000006_create_employees_table::Migration),
            Box::new(m20260111_000007_create_aircraft_table::Migration),
            Box::new(m20260111_000008_create_flights_table::Migration),
            Box::new(m20260111_000009_create_aircraft_assignments_table::Migration),
            Box::new(m20260111_000010_create_employee_assignments_table::Migration),
        ]
    }
}
