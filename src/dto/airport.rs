use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AirportDto {
    #[serde(default)]
    pub name: String,
    /// IATA-style three-letter code, unique across airports.
    #[serde(default)]
    pub code: String,
    pub city_id: Option<i32>,
}

impl AirportDto {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if self.name.trim().is_empty() {
            messages.push("Airport name must not be blank".to_string());
        }
        if self.code.trim().is_empty() {
            messages.push("Airport code must not be blank".to_string());
        }
        if self.code.chars().count() != 3 {
            messages.push("Airport code must be 3 characters".to_string());
        }
        if self.city_id.is_none() {
            messages.push("City ID must not be null".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(messages))
        }
    }
}
