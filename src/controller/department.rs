use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{api::ErrorResponse, department::DepartmentDto},
    error::AppError,
    model::department::Department,
    service::department::DepartmentService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Create a new department.
#[utoipa::path(
    post,
    path = "/departments",
    tag = DEPARTMENT_TAG,
    request_body = DepartmentDto,
    responses(
        (status = 201, description = "Successfully created department", body = Department),
        (status = 400, description = "Invalid department data", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let department = DepartmentService::new(&state.db).create(payload).await?;

    let location = format!("/departments/{}", department.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(department),
    ))
}

/// Get all departments.
#[utoipa::path(
    get,
    path = "/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "All departments", body = [Department])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let departments = DepartmentService::new(&state.db).get_all().await?;

    Ok(Json(departments))
}

/// Get a department by ID.
#[utoipa::path(
    get,
    path = "/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department with the given ID", body = Department),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let department = DepartmentService::new(&state.db).get_by_id(id).await?;

    Ok(Json(department))
}

/// Update a department.
#[utoipa::path(
    put,
    path = "/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = DepartmentDto,
    responses(
        (status = 200, description = "Updated department", body = Department),
        (status = 400, description = "Invalid department data", body = ErrorResponse),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<DepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let department = DepartmentService::new(&state.db).update(id, payload).await?;

    Ok(Json(department))
}

/// Delete a department.
#[utoipa::path(
    delete,
    path = "/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Department deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DepartmentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
