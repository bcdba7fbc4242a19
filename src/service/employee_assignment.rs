use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::employee::EmployeeRepository;
use crate::data::employee_assignment::{EmployeeAssignmentKey, EmployeeAssignmentRepository};
use crate::data::flight::FlightRepository;
use crate::dto::employee_assignment::EmployeeAssignmentDto;
use crate::error::AppError;
use crate::model::employee::EmployeeRelations;
use crate::model::employee_assignment::{EmployeeAssignment, EmployeeAssignmentParams};

pub struct EmployeeAssignmentService<'a> {
    db: &'a DatabaseConnection,
    /// Departments whose employees may be put on a flight (flight crew and
    /// cabin staff in the default configuration).
    eligible_departments: &'a [i32],
}

impl<'a> EmployeeAssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, eligible_departments: &'a [i32]) -> Self {
        Self {
            db,
            eligible_departments,
        }
    }

    pub async fn create(&self, dto: EmployeeAssignmentDto) -> Result<EmployeeAssignment, AppError> {
        dto.validate()?;
        let params = EmployeeAssignmentParams::from_dto(dto);

        let employee = EmployeeRepository::new(self.db)
            .get_by_id(params.employee_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Employee with ID {} not found",
                params.employee_id
            )))?;
        FlightRepository::new(self.db)
            .get_by_id(params.flight_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Flight with ID {} not found",
                params.flight_id
            )))?;

        let repository = EmployeeAssignmentRepository::new(self.db);
        if repository
            .is_assigned_on(params.employee_id, params.date)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Employee with ID {} is not available on {}",
                params.employee_id, params.date
            )));
        }

        self.validate_employee_job(&employee)?;

        let assignment = repository.create(params).await?;

        Ok(EmployeeAssignment::from_relations(assignment))
    }

    pub async fn get_all(&self) -> Result<Vec<EmployeeAssignment>, AppError> {
        let assignments = EmployeeAssignmentRepository::new(self.db).get_all().await?;

        Ok(assignments
            .into_iter()
            .map(EmployeeAssignment::from_relations)
            .collect())
    }

    pub async fn get_by_id(&self, id: EmployeeAssignmentKey) -> Result<EmployeeAssignment, AppError> {
        let assignment = EmployeeAssignmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(EmployeeAssignment::from_relations(assignment))
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<EmployeeAssignment>, AppError> {
        let assignments = EmployeeAssignmentRepository::new(self.db)
            .get_by_date(date)
            .await?;

        Ok(assignments
            .into_iter()
            .map(EmployeeAssignment::from_relations)
            .collect())
    }

    pub async fn get_by_employee_and_date_range(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<EmployeeAssignment>, AppError> {
        let assignments = EmployeeAssignmentRepository::new(self.db)
            .get_by_employee_and_range(employee_id, start, end)
            .await?;

        Ok(assignments
            .into_iter()
            .map(EmployeeAssignment::from_relations)
            .collect())
    }

    pub async fn get_by_flight_and_date_range(
        &self,
        flight_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<EmployeeAssignment>, AppError> {
        let assignments = EmployeeAssignmentRepository::new(self.db)
            .get_by_flight_and_range(flight_id, start, end)
            .await?;

        Ok(assignments
            .into_iter()
            .map(EmployeeAssignment::from_relations)
            .collect())
    }

    /// Re-keys an assignment. Availability and job eligibility are
    /// re-validated in full, with the row being updated excluded from the
    /// conflict check so it cannot collide with itself.
    pub async fn update(
        &self,
        id: EmployeeAssignmentKey,
        dto: EmployeeAssignmentDto,
    ) -> Result<EmployeeAssignment, AppError> {
        dto.validate()?;
        let params = EmployeeAssignmentParams::from_dto(dto);

        let repository = EmployeeAssignmentRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let employee = EmployeeRepository::new(self.db)
            .get_by_id(params.employee_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Employee with ID {} not found",
                params.employee_id
            )))?;
        FlightRepository::new(self.db)
            .get_by_id(params.flight_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Flight with ID {} not found",
                params.flight_id
            )))?;

        if repository
            .is_assigned_on_excluding(params.employee_id, params.date, id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Employee with ID {} is not available on {}",
                params.employee_id, params.date
            )));
        }

        self.validate_employee_job(&employee)?;

        let assignment = repository.update(id, params).await?;

        Ok(EmployeeAssignment::from_relations(assignment))
    }

    pub async fn delete(&self, id: EmployeeAssignmentKey) -> Result<(), AppError> {
        EmployeeAssignmentRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    fn validate_employee_job(&self, employee: &EmployeeRelations) -> Result<(), AppError> {
        if !self.eligible_departments.contains(&employee.department.id) {
            return Err(AppError::BadRequest(format!(
                "Employee with job {} cannot be assigned to a flight",
                employee.job.title
            )));
        }

        Ok(())
    }
}

fn not_found(id: EmployeeAssignmentKey) -> AppError {
    AppError::NotFound(format!(
        "EmployeeAssignment with ID ({}, {}, {}) not found",
        id.0, id.1, id.2
    ))
}
