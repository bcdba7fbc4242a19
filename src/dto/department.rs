use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    #[serde(default)]
    pub name: String,
}

impl DepartmentDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(vec![
                "Department name must not be blank".to_string(),
            ]));
        }

        Ok(())
    }
}
