//! Job factory for creating test job entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test jobs with customizable fields.
///
/// Jobs belong to a department, so the factory takes the owning department's
/// id up front and fills the remaining fields with defaults.
pub struct JobFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    min_salary: f64,
    max_salary: f64,
    department_id: i32,
}

impl<'a> JobFactory<'a> {
    /// Creates a new JobFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Job {id}"` where id is auto-incremented
    /// - min_salary: `3000.0`
    /// - max_salary: `9000.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `department_id` - ID of the department the job belongs to
    ///
    /// # Returns
    /// - `JobFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, department_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Job {}", id),
            min_salary: 3000.0,
            max_salary: 9000.0,
            department_id,
        }
    }

    /// Sets the title for the job.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the minimum salary for the job.
    pub fn min_salary(mut self, min_salary: f64) -> Self {
        self.min_salary = min_salary;
        self
    }

    /// Sets the maximum salary for the job.
    pub fn max_salary(mut self, max_salary: f64) -> Self {
        self.max_salary = max_salary;
        self
    }

    /// Builds and inserts the job entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::job::Model)` - Created job entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::job::Model, DbErr> {
        entity::job::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            min_salary: ActiveValue::Set(self.min_salary),
            max_salary: ActiveValue::Set(self.max_salary),
            department_id: ActiveValue::Set(self.department_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a job with default values in the given department.
///
/// Shorthand for `JobFactory::new(db, department_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `department_id` - ID of the department the job belongs to
///
/// # Returns
/// - `Ok(entity::job::Model)` - Created job entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_job(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<entity::job::Model, DbErr> {
    JobFactory::new(db, department_id).build().await
}
