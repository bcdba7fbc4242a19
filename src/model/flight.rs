use chrono::NaiveTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::flight::FlightDto;
use crate::model::airport::{Airport, AirportRelations};

pub struct FlightParams {
    pub number: String,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub distance: i32,
}

impl FlightParams {
    pub fn from_dto(dto: FlightDto) -> Self {
        Self {
            number: dto.number,
            departure_airport_id: dto.departure_airport_id.unwrap_or_default(),
            arrival_airport_id: dto.arrival_airport_id.unwrap_or_default(),
            departure_time: dto.departure_time.unwrap_or_default(),
            arrival_time: dto.arrival_time.unwrap_or_default(),
            distance: dto.distance.unwrap_or_default(),
        }
    }
}

/// A flight row joined with both endpoint airports and their location chains.
#[derive(Debug, Clone)]
pub struct FlightRelations {
    pub flight: entity::flight::Model,
    pub departure_airport: AirportRelations,
    pub arrival_airport: AirportRelations,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i32,
    pub number: String,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub distance: i32,
}

impl Flight {
    pub fn from_relations(relations: FlightRelations) -> Self {
        Self {
            id: relations.flight.id,
            number: relations.flight.number,
            departure_airport: Airport::from_relations(relations.departure_airport),
            arrival_airport: Airport::from_relations(relations.arrival_airport),
            departure_time: relations.flight.departure_time,
            arrival_time: relations.flight.arrival_time,
            distance: relations.flight.distance,
        }
    }
}
