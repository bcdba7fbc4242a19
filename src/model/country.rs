use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::country::CountryDto;

pub struct CountryParams {
    pub name: String,
    pub code: String,
}

impl CountryParams {
    pub fn from_dto(dto: CountryDto) -> Self {
        Self {
            name: dto.name,
            code: dto.code,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub code: String,
}

impl Country {
    pub fn from_entity(model: entity::country::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
        }
    }
}
