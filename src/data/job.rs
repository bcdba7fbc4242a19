use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::job::{JobParams, JobRelations};

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new job and returns it with its related department.
    pub async fn create(&self, params: JobParams) -> Result<JobRelations, DbErr> {
        let job = entity::job::ActiveModel {
            title: ActiveValue::Set(params.title),
            min_salary: ActiveValue::Set(params.min_salary),
            max_salary: ActiveValue::Set(params.max_salary),
            department_id: ActiveValue::Set(params.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(job.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Job with id {} not found after creation",
                job.id
            )))
    }

    pub async fn get_all(&self) -> Result<Vec<JobRelations>, DbErr> {
        let jobs = entity::prelude::Job::find()
            .find_also_related(entity::prelude::Department)
            .order_by_asc(entity::job::Column::Id)
            .all(self.db)
            .await?;

        jobs.into_iter().map(into_relations).collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<JobRelations>, DbErr> {
        let result = entity::prelude::Job::find_by_id(id)
            .find_also_related(entity::prelude::Department)
            .one(self.db)
            .await?;

        result.map(into_relations).transpose()
    }

    pub async fn update(&self, id: i32, params: JobParams) -> Result<JobRelations, DbErr> {
        let job = entity::prelude::Job::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Job with id {id} not found")))?;

        let mut active_model: entity::job::ActiveModel = job.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.min_salary = ActiveValue::Set(params.min_salary);
        active_model.max_salary = ActiveValue::Set(params.max_salary);
        active_model.department_id = ActiveValue::Set(params.department_id);

        let updated = active_model.update(self.db).await?;

        self.get_by_id(updated.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Job with id {} not found after update",
                updated.id
            )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Job::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

fn into_relations(
    (job, department): (entity::job::Model, Option<entity::department::Model>),
) -> Result<JobRelations, DbErr> {
    let department = department.ok_or(DbErr::RecordNotFound(format!(
        "Department for job with id {} not found",
        job.id
    )))?;

    Ok(JobRelations { job, department })
}
