use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::{DateQuery, DateRangeQuery},
    dto::{api::ErrorResponse, employee::EmployeeDto},
    error::AppError,
    model::employee::Employee,
    service::employee::EmployeeService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// Create a new employee.
///
/// The email must be unique, the referenced job must exist, and the optional
/// manager must reference an existing employee.
#[utoipa::path(
    post,
    path = "/employees",
    tag = EMPLOYEE_TAG,
    request_body = EmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = Employee),
        (status = 400, description = "Invalid employee data, duplicate email or unknown job/manager", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee = EmployeeService::new(&state.db).create(payload).await?;

    let location = format!("/employees/{}", employee.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

/// Get all employees.
#[utoipa::path(
    get,
    path = "/employees",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "All employees", body = [Employee])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let employees = EmployeeService::new(&state.db).get_all().await?;

    Ok(Json(employees))
}

/// Get employees with no assignment on the given date.
#[utoipa::path(
    get,
    path = "/employees/available",
    tag = EMPLOYEE_TAG,
    params(
        ("date" = String, Query, description = "ISO-8601 date to check availability for")
    ),
    responses(
        (status = 200, description = "Employees available on the date", body = [Employee])
    ),
)]
pub async fn get_available(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let employees = EmployeeService::new(&state.db)
        .get_available_by_date(query.date)
        .await?;

    Ok(Json(employees))
}

/// Get an employee by ID.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee with the given ID", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let employee = EmployeeService::new(&state.db).get_by_id(id).await?;

    Ok(Json(employee))
}

/// Get the dates within an inclusive range on which the employee has no
/// assignment, in chronological order.
#[utoipa::path(
    get,
    path = "/employees/{id}/availabilities",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID"),
        ("startDate" = String, Query, description = "Start of the range (inclusive)"),
        ("endDate" = String, Query, description = "End of the range (inclusive)")
    ),
    responses(
        (status = 200, description = "Available dates in the range", body = [String])
    ),
)]
pub async fn get_availabilities(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let dates = EmployeeService::new(&state.db)
        .get_availabilities(id, query.start_date, query.end_date)
        .await?;

    Ok(Json(dates))
}

/// Update an employee.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = EmployeeDto,
    responses(
        (status = 200, description = "Updated employee", body = Employee),
        (status = 400, description = "Invalid employee data, duplicate email or unknown job/manager", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<EmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee = EmployeeService::new(&state.db).update(id, payload).await?;

    Ok(Json(employee))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    EmployeeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
