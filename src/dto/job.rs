use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    #[serde(default)]
    pub title: String,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub department_id: Option<i32>,
}

impl JobDto {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if self.title.trim().is_empty() {
            messages.push("Job title must not be blank".to_string());
        }
        match self.min_salary {
            None => messages.push("Minimum salary must not be null".to_string()),
            Some(salary) if salary <= 0.0 => {
                messages.push("Minimum salary must be positive".to_string())
            }
            _ => {}
        }
        match self.max_salary {
            None => messages.push("Maximum salary must not be null".to_string()),
            Some(salary) if salary <= 0.0 => {
                messages.push("Maximum salary must be positive".to_string())
            }
            _ => {}
        }
        if self.department_id.is_none() {
            messages.push("Department ID must not be null".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(messages))
        }
    }
}
