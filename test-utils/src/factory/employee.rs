//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// Employees hold a job, so the factory takes the job's id up front and fills
/// the remaining fields with defaults. Emails are unique per factory call.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::employee::EmployeeFactory;
///
/// let employee = EmployeeFactory::new(&db, job.id)
///     .email("ada@example.com")
///     .flight_hours(1200)
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    phone_number: String,
    email: String,
    salary: i32,
    job_id: i32,
    flight_hours: Option<i32>,
    manager_id: Option<i32>,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First {id}"`, last_name: `"Last {id}"`
    /// - phone_number: unique number derived from the id
    /// - email: `"employee{id}@example.com"`
    /// - salary: `5000`
    /// - flight_hours: `None`
    /// - manager_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `job_id` - ID of the job the employee holds
    ///
    /// # Returns
    /// - `EmployeeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, job_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            phone_number: format!("+1555{:07}", id),
            email: format!("employee{}@example.com", id),
            salary: 5000,
            job_id,
            flight_hours: None,
            manager_id: None,
        }
    }

    /// Sets the first name for the employee.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name for the employee.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email for the employee.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the salary for the employee.
    pub fn salary(mut self, salary: i32) -> Self {
        self.salary = salary;
        self
    }

    /// Sets the accumulated flight hours for the employee.
    pub fn flight_hours(mut self, flight_hours: i32) -> Self {
        self.flight_hours = Some(flight_hours);
        self
    }

    /// Sets the manager for the employee.
    pub fn manager_id(mut self, manager_id: i32) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Builds and inserts the employee entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::employee::Model)` - Created employee entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
            salary: ActiveValue::Set(self.salary),
            job_id: ActiveValue::Set(self.job_id),
            flight_hours: ActiveValue::Set(self.flight_hours),
            manager_id: ActiveValue::Set(self.manager_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values holding the given job.
///
/// Shorthand for `EmployeeFactory::new(db, job_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `job_id` - ID of the job the employee holds
///
/// # Returns
/// - `Ok(entity::employee::Model)` - Created employee entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_employee(
    db: &DatabaseConnection,
    job_id: i32,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db, job_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_employee_with_dependencies;

    #[tokio::test]
    async fn creates_employee_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_personnel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (department, job, employee) = create_employee_with_dependencies(db).await?;

        assert_eq!(job.department_id, department.id);
        assert_eq!(employee.job_id, job.id);
        assert!(employee.flight_hours.is_none());
        assert!(employee.manager_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_employees() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_personnel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, job, first) = create_employee_with_dependencies(db).await?;
        let second = create_employee(db, job.id).await?;

        assert_ne!(first.email, second.email);
        assert_ne!(first.phone_number, second.phone_number);

        Ok(())
    }
}
