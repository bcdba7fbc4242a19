use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::airport::AirportDto;
use crate::model::city::{City, CityRelations};

pub struct AirportParams {
    pub name: String,
    pub code: String,
    pub city_id: i32,
}

impl AirportParams {
    pub fn from_dto(dto: AirportDto) -> Self {
        Self {
            name: dto.name,
            code: dto.code,
            city_id: dto.city_id.unwrap_or_default(),
        }
    }
}

/// An airport row joined with its city and that city's country.
#[derive(Debug, Clone)]
pub struct AirportRelations {
    pub airport: entity::airport::Model,
    pub city: entity::city::Model,
    pub country: entity::country::Model,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub city: City,
}

impl Airport {
    pub fn from_relations(relations: AirportRelations) -> Self {
        Self {
            id: relations.airport.id,
            name: relations.airport.name,
            code: relations.airport.code,
            city: City::from_relations(CityRelations {
                city: relations.city,
                country: relations.country,
            }),
        }
    }
}
