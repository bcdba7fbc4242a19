use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    #[serde(default)]
    pub name: String,
    pub country_id: Option<i32>,
}

impl CityDto {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if self.name.trim().is_empty() {
            messages.push("City name must not be blank".to_string());
        }
        if self.country_id.is_none() {
            messages.push("Country ID must not be null".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(messages))
        }
    }
}
