use chrono::NaiveTime;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    /// Flight number, unique across flights.
    #[serde(default)]
    pub number: String,
    pub departure_airport_id: Option<i32>,
    pub arrival_airport_id: Option<i32>,
    pub departure_time: Option<NaiveTime>,
    pub arrival_time: Option<NaiveTime>,
    pub distance: Option<i32>,
}

impl FlightDto {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if self.number.trim().is_empty() {
            messages.push("Flight number must not be blank".to_string());
        }
        if self.departure_airport_id.is_none() {
            messages.push("Departure airport ID must not be null".to_string());
        }
        if self.arrival_airport_id.is_none() {
            messages.push("Arrival airport ID must not be null".to_string());
        }
        if self.departure_time.is_none() {
            messages.push("Departure time must not be null".to_string());
        }
        if self.arrival_time.is_none() {
            messages.push("Arrival time must not be null".to_string());
        }
        match self.distance {
            None => messages.push("Distance must not be null".to_string()),
            Some(distance) if distance <= 0 => {
                messages.push("Distance must be positive".to_string())
            }
            _ => {}
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(messages))
        }
    }
}
