use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{api::ErrorResponse, job::JobDto},
    error::AppError,
    model::job::Job,
    service::job::JobService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping job endpoints in OpenAPI documentation
pub static JOB_TAG: &str = "job";

/// Create a new job. The referenced department must exist.
#[utoipa::path(
    post,
    path = "/jobs",
    tag = JOB_TAG,
    request_body = JobDto,
    responses(
        (status = 201, description = "Successfully created job", body = Job),
        (status = 400, description = "Invalid job data or unknown department", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<JobDto>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::new(&state.db).create(payload).await?;

    let location = format!("/jobs/{}", job.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(job),
    ))
}

/// Get all jobs.
#[utoipa::path(
    get,
    path = "/jobs",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "All jobs", body = [Job])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let jobs = JobService::new(&state.db).get_all().await?;

    Ok(Json(jobs))
}

/// Get a job by ID.
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job with the given ID", body = Job),
        (status = 404, description = "Job not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::new(&state.db).get_by_id(id).await?;

    Ok(Json(job))
}

/// Update a job.
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = JobDto,
    responses(
        (status = 200, description = "Updated job", body = Job),
        (status = 400, description = "Invalid job data or unknown department", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<JobDto>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::new(&state.db).update(id, payload).await?;

    Ok(Json(job))
}

/// Delete a job.
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 204, description = "Job deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    JobService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
