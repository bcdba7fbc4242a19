//! Country factory for creating test country entities.
//!
//! This module provides factory methods for creating country entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::{letter_code, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test countries with customizable fields.
///
/// Provides a builder pattern for creating country entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::country::CountryFactory;
///
/// let country = CountryFactory::new(&db)
///     .name("Portugal")
///     .code("PT")
///     .build()
///     .await?;
/// ```
pub struct CountryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
}

impl<'a> CountryFactory<'a> {
    /// Creates a new CountryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Country {id}"` where id is auto-incremented
    /// - code: unique two-letter code derived from the id
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CountryFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Country {}", id),
            code: letter_code(id, 2),
        }
    }

    /// Sets the name for the country.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the two-letter code for the country.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Builds and inserts the country entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::country::Model)` - Created country entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::country::Model, DbErr> {
        entity::country::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a country with default values.
///
/// Shorthand for `CountryFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::country::Model)` - Created country entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    CountryFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_country_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Country)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let country = create_country(db).await?;

        assert!(!country.name.is_empty());
        assert_eq!(country.code.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_countries() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Country)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_country(db).await?;
        let second = create_country(db).await?;

        assert_ne!(first.code, second.code);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
