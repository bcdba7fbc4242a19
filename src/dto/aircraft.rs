use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AircraftDto {
    /// Tail registration, unique across the fleet.
    #[serde(default)]
    pub registration: String,
    #[serde(rename = "type", default)]
    pub aircraft_type: String,
    /// Maximum range in kilometers.
    #[serde(default)]
    pub range: i32,
    #[serde(default)]
    pub capacity: i32,
}

impl AircraftDto {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if self.registration.trim().is_empty() {
            messages.push("Aircraft registration must not be blank".to_string());
        }
        if self.aircraft_type.trim().is_empty() {
            messages.push("Aircraft type must not be blank".to_string());
        }
        if self.range <= 0 {
            messages.push("Range must be positive".to_string());
        }
        if self.capacity <= 0 {
            messages.push("Capacity must be positive".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(messages))
        }
    }
}
