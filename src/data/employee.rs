use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::employee::{EmployeeParams, EmployeeRelations};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new employee and returns them with job and department.
    pub async fn create(&self, params: EmployeeParams) -> Result<EmployeeRelations, DbErr> {
        let employee = entity::employee::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            phone_number: ActiveValue::Set(params.phone_number),
            email: ActiveValue::Set(params.email),
            salary: ActiveValue::Set(params.salary),
            job_id: ActiveValue::Set(params.job_id),
            flight_hours: ActiveValue::Set(params.flight_hours),
            manager_id: ActiveValue::Set(params.manager_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(employee.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Employee with id {} not found after creation",
                employee.id
            )))
    }

    pub async fn get_all(&self) -> Result<Vec<EmployeeRelations>, DbErr> {
        let employees = entity::prelude::Employee::find()
            .order_by_asc(entity::employee::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(employees).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EmployeeRelations>, DbErr> {
        let employee = entity::prelude::Employee::find_by_id(id)
            .one(self.db)
            .await?;

        match employee {
            Some(employee) => {
                Ok(self.load_relations(vec![employee]).await?.into_iter().next())
            }
            None => Ok(None),
        }
    }

    /// Looks up an employee by email for uniqueness checks.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets employees with no assignment on the given date.
    pub async fn get_available_on(&self, date: NaiveDate) -> Result<Vec<EmployeeRelations>, DbErr> {
        let busy = Query::select()
            .column(entity::employee_assignment::Column::EmployeeId)
            .from(entity::employee_assignment::Entity)
            .and_where(entity::employee_assignment::Column::Date.eq(date))
            .to_owned();

        let employees = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.not_in_subquery(busy))
            .order_by_asc(entity::employee::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(employees).await
    }

    pub async fn update(&self, id: i32, params: EmployeeParams) -> Result<EmployeeRelations, DbErr> {
        let employee = entity::prelude::Employee::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Employee with id {id} not found"
            )))?;

        let mut active_model: entity::employee::ActiveModel = employee.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.phone_number = ActiveValue::Set(params.phone_number);
        active_model.email = ActiveValue::Set(params.email);
        active_model.salary = ActiveValue::Set(params.salary);
        active_model.job_id = ActiveValue::Set(params.job_id);
        active_model.flight_hours = ActiveValue::Set(params.flight_hours);
        active_model.manager_id = ActiveValue::Set(params.manager_id);

        let updated = active_model.update(self.db).await?;

        self.get_by_id(updated.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Employee with id {} not found after update",
                updated.id
            )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Resolves the job and department for each employee with one batched
    /// query per table.
    pub async fn load_relations(
        &self,
        employees: Vec<entity::employee::Model>,
    ) -> Result<Vec<EmployeeRelations>, DbErr> {
        if employees.is_empty() {
            return Ok(Vec::new());
        }

        let job_ids: Vec<i32> = employees.iter().map(|e| e.job_id).collect();
        let jobs_map: HashMap<i32, entity::job::Model> = entity::prelude::Job::find()
            .filter(entity::job::Column::Id.is_in(job_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|j| (j.id, j))
            .collect();

        let department_ids: Vec<i32> = jobs_map.values().map(|j| j.department_id).collect();
        let departments_map: HashMap<i32, entity::department::Model> =
            entity::prelude::Department::find()
                .filter(entity::department::Column::Id.is_in(department_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|d| (d.id, d))
                .collect();

        employees
            .into_iter()
            .map(|employee| {
                let job = jobs_map
                    .get(&employee.job_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Job for employee with id {} not found",
                        employee.id
                    )))?;
                let department = departments_map
                    .get(&job.department_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Department for job with id {} not found",
                        job.id
                    )))?;

                Ok(EmployeeRelations {
                    employee,
                    job,
                    department,
                })
            })
            .collect()
    }
}
