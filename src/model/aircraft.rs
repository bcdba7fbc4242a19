use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::aircraft::AircraftDto;

pub struct AircraftParams {
    pub registration: String,
    pub aircraft_type: String,
    pub range: i32,
    pub capacity: i32,
}

impl AircraftParams {
    pub fn from_dto(dto: AircraftDto) -> Self {
        Self {
            registration: dto.registration,
            aircraft_type: dto.aircraft_type,
            range: dto.range,
            capacity: dto.capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    pub id: i32,
    pub registration: String,
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub range: i32,
    pub capacity: i32,
}

impl Aircraft {
    pub fn from_entity(model: entity::aircraft::Model) -> Self {
        Self {
            id: model.id,
            registration: model.registration,
            aircraft_type: model.aircraft_type,
            range: model.range,
            capacity: model.capacity,
        }
    }
}
