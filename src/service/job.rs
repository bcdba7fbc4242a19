use sea_orm::DatabaseConnection;

use crate::data::department::DepartmentRepository;
use crate::data::job::JobRepository;
use crate::dto::job::JobDto;
use crate::error::AppError;
use crate::model::job::{Job, JobParams};

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: JobDto) -> Result<Job, AppError> {
        dto.validate()?;
        let params = JobParams::from_dto(dto);

        self.validate_department_exists(params.department_id).await?;

        let job = JobRepository::new(self.db).create(params).await?;

        Ok(Job::from_relations(job))
    }

    pub async fn get_all(&self) -> Result<Vec<Job>, AppError> {
        let jobs = JobRepository::new(self.db).get_all().await?;

        Ok(jobs.into_iter().map(Job::from_relations).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Job, AppError> {
        let job = JobRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Job with ID {id} not found")))?;

        Ok(Job::from_relations(job))
    }

    pub async fn update(&self, id: i32, dto: JobDto) -> Result<Job, AppError> {
        dto.validate()?;
        let params = JobParams::from_dto(dto);

        let repository = JobRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Job with ID {id} not found")))?;

        self.validate_department_exists(params.department_id).await?;

        let job = repository.update(id, params).await?;

        Ok(Job::from_relations(job))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        JobRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn validate_department_exists(&self, department_id: i32) -> Result<(), AppError> {
        DepartmentRepository::new(self.db)
            .get_by_id(department_id)
            .await?
            .ok_or(AppError::BadRequest(format!(
                "Department with ID {department_id} does not exist"
            )))?;

        Ok(())
    }
}
