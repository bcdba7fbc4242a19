use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::employee::EmployeeRepository;
use crate::data::employee_assignment::EmployeeAssignmentRepository;
use crate::data::job::JobRepository;
use crate::dto::employee::EmployeeDto;
use crate::error::AppError;
use crate::model::employee::{Employee, EmployeeParams};

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: EmployeeDto) -> Result<Employee, AppError> {
        dto.validate()?;
        let params = EmployeeParams::from_dto(dto);

        let repository = EmployeeRepository::new(self.db);
        if repository.get_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Employee with email {} already exists",
                params.email
            )));
        }

        self.validate_job_exists(params.job_id).await?;
        if let Some(manager_id) = params.manager_id {
            self.validate_employee_exists(manager_id).await?;
        }

        let employee = repository.create(params).await?;

        Ok(Employee::from_relations(employee))
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = EmployeeRepository::new(self.db).get_all().await?;

        Ok(employees.into_iter().map(Employee::from_relations).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Employee, AppError> {
        let employee = EmployeeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Employee with ID {id} not found"
            )))?;

        Ok(Employee::from_relations(employee))
    }

    /// Gets employees with no assignment on the given date.
    pub async fn get_available_by_date(&self, date: NaiveDate) -> Result<Vec<Employee>, AppError> {
        let employees = EmployeeRepository::new(self.db)
            .get_available_on(date)
            .await?;

        Ok(employees.into_iter().map(Employee::from_relations).collect())
    }

    /// Gets the dates within `[start, end]` on which the employee has no
    /// assignment, in chronological order.
    pub async fn get_availabilities(
        &self,
        id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AppError> {
        let assigned = EmployeeAssignmentRepository::new(self.db)
            .get_assigned_dates(id, start, end)
            .await?;

        Ok(start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| !assigned.contains(date))
            .collect())
    }

    pub async fn update(&self, id: i32, dto: EmployeeDto) -> Result<Employee, AppError> {
        dto.validate()?;
        let params = EmployeeParams::from_dto(dto);

        let repository = EmployeeRepository::new(self.db);

        if let Some(existing) = repository.get_by_email(&params.email).await? {
            if existing.id != id {
                return Err(AppError::BadRequest(format!(
                    "Employee with email {} already exists",
                    params.email
                )));
            }
        }

        repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Employee with ID {id} not found"
            )))?;

        self.validate_job_exists(params.job_id).await?;
        if let Some(manager_id) = params.manager_id {
            self.validate_employee_exists(manager_id).await?;
        }

        let employee = repository.update(id, params).await?;

        Ok(Employee::from_relations(employee))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        EmployeeRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn validate_job_exists(&self, job_id: i32) -> Result<(), AppError> {
        JobRepository::new(self.db)
            .get_by_id(job_id)
            .await?
            .ok_or(AppError::BadRequest(format!(
                "Job with ID {job_id} does not exist"
            )))?;

        Ok(())
    }

    async fn validate_employee_exists(&self, employee_id: i32) -> Result<(), AppError> {
        EmployeeRepository::new(self.db)
            .get_by_id(employee_id)
            .await?
            .ok_or(AppError::BadRequest(format!(
                "Employee with ID {employee_id} does not exist"
            )))?;

        Ok(())
    }
}
