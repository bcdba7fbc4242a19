use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    pub salary: Option<i32>,
    pub job_id: Option<i32>,
    pub flight_hours: Option<i32>,
    /// Optional reference to another employee acting as manager.
    pub manager_id: Option<i32>,
}

impl EmployeeDto {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if self.first_name.trim().is_empty() {
            messages.push("First name must not be blank".to_string());
        }
        if self.last_name.trim().is_empty() {
            messages.push("Last name must not be blank".to_string());
        }
        if self.phone_number.trim().is_empty() {
            messages.push("Phone number must not be blank".to_string());
        }
        if self.email.trim().is_empty() {
            messages.push("Email must not be blank".to_string());
        } else if !is_valid_email(&self.email) {
            messages.push("Email should be valid".to_string());
        }
        match self.salary {
            None => messages.push("Salary must not be null".to_string()),
            Some(salary) if salary <= 0 => messages.push("Salary must be positive".to_string()),
            _ => {}
        }
        if self.job_id.is_none() {
            messages.push("Job ID must not be null".to_string());
        }
        if matches!(self.flight_hours, Some(hours) if hours <= 0) {
            messages.push("Flight hours must be positive".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(messages))
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}
