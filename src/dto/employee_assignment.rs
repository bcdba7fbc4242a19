use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAssignmentDto {
    pub employee_id: Option<i32>,
    pub flight_id: Option<i32>,
    pub date: Option<NaiveDate>,
}

impl EmployeeAssignmentDto {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if self.employee_id.is_none() {
            messages.push("Employee ID must not be null".to_string());
        }
        if self.flight_id.is_none() {
            messages.push("Flight ID must not be null".to_string());
        }
        if self.date.is_none() {
            messages.push("Date must not be null".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(messages))
        }
    }
}
