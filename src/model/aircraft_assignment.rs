use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::aircraft_assignment::AircraftAssignmentDto;
use crate::model::aircraft::Aircraft;
use crate::model::flight::{Flight, FlightRelations};

pub struct AircraftAssignmentParams {
    pub aircraft_id: i32,
    pub flight_id: i32,
    pub date: NaiveDate,
}

impl AircraftAssignmentParams {
    pub fn from_dto(dto: AircraftAssignmentDto) -> Self {
        Self {
            aircraft_id: dto.aircraft_id.unwrap_or_default(),
            flight_id: dto.flight_id.unwrap_or_default(),
            date: dto.date.unwrap_or_default(),
        }
    }
}

/// An assignment row joined with its aircraft and fully resolved flight.
#[derive(Debug, Clone)]
pub struct AircraftAssignmentRelations {
    pub assignment: entity::aircraft_assignment::Model,
    pub aircraft: entity::aircraft::Model,
    pub flight: FlightRelations,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AircraftAssignmentId {
    pub aircraft_id: i32,
    pub flight_id: i32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AircraftAssignment {
    pub id: AircraftAssignmentId,
    pub aircraft: Aircraft,
    pub flight: Flight,
}

impl AircraftAssignment {
    pub fn from_relations(relations: AircraftAssignmentRelations) -> Self {
        Self {
            id: AircraftAssignmentId {
                aircraft_id: relations.assignment.aircraft_id,
                flight_id: relations.assignment.flight_id,
                date: relations.assignment.date,
            },
            aircraft: Aircraft::from_entity(relations.aircraft),
            flight: Flight::from_relations(relations.flight),
        }
    }
}
