use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    #[serde(default)]
    pub name: String,
    /// ISO-style two-letter country code, unique across countries.
    #[serde(default)]
    pub code: String,
}

impl CountryDto {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if self.name.trim().is_empty() {
            messages.push("Country name must not be blank".to_string());
        }
        if self.code.trim().is_empty() {
            messages.push("Country code must not be blank".to_string());
        }
        if self.code.chars().count() != 2 {
            messages.push("Country code must be 2 characters".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(messages))
        }
    }
}
