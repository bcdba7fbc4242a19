//! Department factory for creating test department entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments with customizable fields.
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new DepartmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Department {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DepartmentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Department {}", id),
        }
    }

    /// Sets the name for the department.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the department entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::department::Model)` - Created department entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
///
/// Shorthand for `DepartmentFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::department::Model)` - Created department entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_department(
    db: &DatabaseConnection,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}
