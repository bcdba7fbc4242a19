use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::department::DepartmentDto;

pub struct DepartmentParams {
    pub name: String,
}

impl DepartmentParams {
    pub fn from_dto(dto: DepartmentDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i32,
    pub name: String,
}

impl Department {
    pub fn from_entity(model: entity::department::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
