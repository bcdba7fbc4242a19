use sea_orm::DatabaseConnection;

use crate::data::department::DepartmentRepository;
use crate::dto::department::DepartmentDto;
use crate::error::AppError;
use crate::model::department::{Department, DepartmentParams};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: DepartmentDto) -> Result<Department, AppError> {
        dto.validate()?;
        let params = DepartmentParams::from_dto(dto);

        let department = DepartmentRepository::new(self.db).create(params).await?;

        Ok(Department::from_entity(department))
    }

    pub async fn get_all(&self) -> Result<Vec<Department>, AppError> {
        let departments = DepartmentRepository::new(self.db).get_all().await?;

        Ok(departments
            .into_iter()
            .map(Department::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Department, AppError> {
        let department = DepartmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Department with ID {id} not found"
            )))?;

        Ok(Department::from_entity(department))
    }

    pub async fn update(&self, id: i32, dto: DepartmentDto) -> Result<Department, AppError> {
        dto.validate()?;
        let params = DepartmentParams::from_dto(dto);

        let repository = DepartmentRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Department with ID {id} not found"
            )))?;

        let department = repository.update(id, params).await?;

        Ok(Department::from_entity(department))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        DepartmentRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
