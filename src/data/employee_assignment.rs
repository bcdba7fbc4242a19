use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::data::employee::EmployeeRepository;
use crate::data::flight::FlightRepository;
use crate::model::employee::EmployeeRelations;
use crate::model::employee_assignment::{EmployeeAssignmentParams, EmployeeAssignmentRelations};
use crate::model::flight::FlightRelations;

/// Composite key identifying one assignment: (employee id, flight id, date).
pub type EmployeeAssignmentKey = (i32, i32, NaiveDate);

pub struct EmployeeAssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeAssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new assignment and returns it with employee and flight
    /// resolved.
    pub async fn create(
        &self,
        params: EmployeeAssignmentParams,
    ) -> Result<EmployeeAssignmentRelations, DbErr> {
        let assignment = entity::employee_assignment::ActiveModel {
            employee_id: ActiveValue::Set(params.employee_id),
            flight_id: ActiveValue::Set(params.flight_id),
            date: ActiveValue::Set(params.date),
        }
        .insert(self.db)
        .await?;

        let key = (assignment.employee_id, assignment.flight_id, assignment.date);
        self.get_by_id(key)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Employee assignment {key:?} not found after creation"
            )))
    }

    pub async fn get_all(&self) -> Result<Vec<EmployeeAssignmentRelations>, DbErr> {
        let assignments = entity::prelude::EmployeeAssignment::find()
            .order_by_asc(entity::employee_assignment::Column::Date)
            .order_by_asc(entity::employee_assignment::Column::EmployeeId)
            .all(self.db)
            .await?;

        self.load_relations(assignments).await
    }

    pub async fn get_by_id(
        &self,
        id: EmployeeAssignmentKey,
    ) -> Result<Option<EmployeeAssignmentRelations>, DbErr> {
        let assignment = entity::prelude::EmployeeAssignment::find_by_id(id)
            .one(self.db)
            .await?;

        match assignment {
            Some(assignment) => Ok(self
                .load_relations(vec![assignment])
                .await?
                .into_iter()
                .next()),
            None => Ok(None),
        }
    }

    pub async fn get_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<EmployeeAssignmentRelations>, DbErr> {
        let assignments = entity::prelude::EmployeeAssignment::find()
            .filter(entity::employee_assignment::Column::Date.eq(date))
            .order_by_asc(entity::employee_assignment::Column::EmployeeId)
            .all(self.db)
            .await?;

        self.load_relations(assignments).await
    }

    pub async fn get_by_employee_and_range(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<EmployeeAssignmentRelations>, DbErr> {
        let assignments = entity::prelude::EmployeeAssignment::find()
            .filter(entity::employee_assignment::Column::EmployeeId.eq(employee_id))
            .filter(entity::employee_assignment::Column::Date.between(start, end))
            .order_by_asc(entity::employee_assignment::Column::Date)
            .all(self.db)
            .await?;

        self.load_relations(assignments).await
    }

    pub async fn get_by_flight_and_range(
        &self,
        flight_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<EmployeeAssignmentRelations>, DbErr> {
        let assignments = entity::prelude::EmployeeAssignment::find()
            .filter(entity::employee_assignment::Column::FlightId.eq(flight_id))
            .filter(entity::employee_assignment::Column::Date.between(start, end))
            .order_by_asc(entity::employee_assignment::Column::Date)
            .all(self.db)
            .await?;

        self.load_relations(assignments).await
    }

    /// Gets the dates within `[start, end]` on which the employee already has
    /// an assignment.
    pub async fn get_assigned_dates(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, DbErr> {
        let assignments = entity::prelude::EmployeeAssignment::find()
            .filter(entity::employee_assignment::Column::EmployeeId.eq(employee_id))
            .filter(entity::employee_assignment::Column::Date.between(start, end))
            .order_by_asc(entity::employee_assignment::Column::Date)
            .all(self.db)
            .await?;

        Ok(assignments.into_iter().map(|a| a.date).collect())
    }

    /// Checks whether the employee has any assignment on the given date.
    pub async fn is_assigned_on(&self, employee_id: i32, date: NaiveDate) -> Result<bool, DbErr> {
        let count = entity::prelude::EmployeeAssignment::find()
            .filter(entity::employee_assignment::Column::EmployeeId.eq(employee_id))
            .filter(entity::employee_assignment::Column::Date.eq(date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Same as [`Self::is_assigned_on`] but ignores one existing row, so an
    /// assignment being updated does not conflict with itself.
    pub async fn is_assigned_on_excluding(
        &self,
        employee_id: i32,
        date: NaiveDate,
        exclude: EmployeeAssignmentKey,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::EmployeeAssignment::find()
            .filter(entity::employee_assignment::Column::EmployeeId.eq(employee_id))
            .filter(entity::employee_assignment::Column::Date.eq(date))
            .filter(
                Condition::any()
                    .add(entity::employee_assignment::Column::EmployeeId.ne(exclude.0))
                    .add(entity::employee_assignment::Column::FlightId.ne(exclude.1))
                    .add(entity::employee_assignment::Column::Date.ne(exclude.2)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces an assignment under a new composite key. The delete and
    /// insert run in one transaction so the row never goes missing.
    pub async fn update(
        &self,
        id: EmployeeAssignmentKey,
        params: EmployeeAssignmentParams,
    ) -> Result<EmployeeAssignmentRelations, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::EmployeeAssignment::delete_by_id(id)
            .exec(&txn)
            .await?;

        entity::employee_assignment::ActiveModel {
            employee_id: ActiveValue::Set(params.employee_id),
            flight_id: ActiveValue::Set(params.flight_id),
            date: ActiveValue::Set(params.date),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        let key = (params.employee_id, params.flight_id, params.date);
        self.get_by_id(key)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Employee assignment {key:?} not found after update"
            )))
    }

    pub async fn delete(&self, id: EmployeeAssignmentKey) -> Result<(), DbErr> {
        entity::prelude::EmployeeAssignment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Resolves the employee chain and the full flight chain for each
    /// assignment with batched queries.
    async fn load_relations(
        &self,
        assignments: Vec<entity::employee_assignment::Model>,
    ) -> Result<Vec<EmployeeAssignmentRelations>, DbErr> {
        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let employee_ids: Vec<i32> = assignments.iter().map(|a| a.employee_id).collect();
        let employees = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.is_in(employee_ids))
            .all(self.db)
            .await?;
        let employees_map: HashMap<i32, EmployeeRelations> = EmployeeRepository::new(self.db)
            .load_relations(employees)
            .await?
            .into_iter()
            .map(|e| (e.employee.id, e))
            .collect();

        let flight_ids: Vec<i32> = assignments.iter().map(|a| a.flight_id).collect();
        let flights = entity::prelude::Flight::find()
            .filter(entity::flight::Column::Id.is_in(flight_ids))
            .all(self.db)
            .await?;
        let flights_map: HashMap<i32, FlightRelations> = FlightRepository::new(self.db)
            .load_relations(flights)
            .await?
            .into_iter()
            .map(|f| (f.flight.id, f))
            .collect();

        assignments
            .into_iter()
            .map(|assignment| {
                let employee = employees_map
                    .get(&assignment.employee_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Employee with id {} not found",
                        assignment.employee_id
                    )))?;
                let flight = flights_map
                    .get(&assignment.flight_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Flight with id {} not found",
                        assignment.flight_id
                    )))?;

                Ok(EmployeeAssignmentRelations {
                    assignment,
                    employee,
                    flight,
                })
            })
            .collect()
    }
}
