use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::city::CityDto;
use crate::model::country::Country;

pub struct CityParams {
    pub name: String,
    pub country_id: i32,
}

impl CityParams {
    pub fn from_dto(dto: CityDto) -> Self {
        Self {
            name: dto.name,
            country_id: dto.country_id.unwrap_or_default(),
        }
    }
}

/// A city row joined with its country.
#[derive(Debug, Clone)]
pub struct CityRelations {
    pub city: entity::city::Model,
    pub country: entity::country::Model,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i32,
    pub name: String,
    pub country: Country,
}

impl City {
    pub fn from_relations(relations: CityRelations) -> Self {
        Self {
            id: relations.city.id,
            name: relations.city.name,
            country: Country::from_entity(relations.country),
        }
    }
}
