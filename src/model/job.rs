use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::job::JobDto;
use crate::model::department::Department;

pub struct JobParams {
    pub title: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub department_id: i32,
}

impl JobParams {
    pub fn from_dto(dto: JobDto) -> Self {
        Self {
            title: dto.title,
            min_salary: dto.min_salary.unwrap_or_default(),
            max_salary: dto.max_salary.unwrap_or_default(),
            department_id: dto.department_id.unwrap_or_default(),
        }
    }
}

/// A job row joined with its department.
#[derive(Debug, Clone)]
pub struct JobRelations {
    pub job: entity::job::Model,
    pub department: entity::department::Model,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub department: Department,
}

impl Job {
    pub fn from_relations(relations: JobRelations) -> Self {
        Self {
            id: relations.job.id,
            title: relations.job.title,
            min_salary: relations.job.min_salary,
            max_salary: relations.job.max_salary,
            department: Department::from_entity(relations.department),
        }
    }
}
