use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::employee_assignment::EmployeeAssignmentDto;
use crate::model::employee::{Employee, EmployeeRelations};
use crate::model::flight::{Flight, FlightRelations};

pub struct EmployeeAssignmentParams {
    pub employee_id: i32,
    pub flight_id: i32,
    pub date: NaiveDate,
}

impl EmployeeAssignmentParams {
    pub fn from_dto(dto: EmployeeAssignmentDto) -> Self {
        Self {
            employee_id: dto.employee_id.unwrap_or_default(),
            flight_id: dto.flight_id.unwrap_or_default(),
            date: dto.date.unwrap_or_default(),
        }
    }
}

/// An assignment row joined with its employee and fully resolved flight.
#[derive(Debug, Clone)]
pub struct EmployeeAssignmentRelations {
    pub assignment: entity::employee_assignment::Model,
    pub employee: EmployeeRelations,
    pub flight: FlightRelations,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAssignmentId {
    pub employee_id: i32,
    pub flight_id: i32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAssignment {
    pub id: EmployeeAssignmentId,
    pub employee: Employee,
    pub flight: Flight,
}

impl EmployeeAssignment {
    pub fn from_relations(relations: EmployeeAssignmentRelations) -> Self {
        Self {
            id: EmployeeAssignmentId {
                employee_id: relations.assignment.employee_id,
                flight_id: relations.assignment.flight_id,
                date: relations.assignment.date,
            },
            employee: Employee::from_relations(relations.employee),
            flight: Flight::from_relations(relations.flight),
        }
    }
}
