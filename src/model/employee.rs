use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::employee::EmployeeDto;
use crate::model::job::{Job, JobRelations};

pub struct EmployeeParams {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub salary: i32,
    pub job_id: i32,
    pub flight_hours: Option<i32>,
    pub manager_id: Option<i32>,
}

impl EmployeeParams {
    pub fn from_dto(dto: EmployeeDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            email: dto.email,
            salary: dto.salary.unwrap_or_default(),
            job_id: dto.job_id.unwrap_or_default(),
            flight_hours: dto.flight_hours,
            manager_id: dto.manager_id,
        }
    }
}

/// An employee row joined with its job and the job's department.
#[derive(Debug, Clone)]
pub struct EmployeeRelations {
    pub employee: entity::employee::Model,
    pub job: entity::job::Model,
    pub department: entity::department::Model,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub salary: i32,
    pub job: Job,
    pub flight_hours: Option<i32>,
    /// Kept as a bare id so the payload stays flat for management chains.
    pub manager_id: Option<i32>,
}

impl Employee {
    pub fn from_relations(relations: EmployeeRelations) -> Self {
        Self {
            id: relations.employee.id,
            first_name: relations.employee.first_name,
            last_name: relations.employee.last_name,
            phone_number: relations.employee.phone_number,
            email: relations.employee.email,
            salary: relations.employee.salary,
            job: Job::from_relations(JobRelations {
                job: relations.job,
                department: relations.department,
            }),
            flight_hours: relations.employee.flight_hours,
            manager_id: relations.employee.manager_id,
        }
    }
}
