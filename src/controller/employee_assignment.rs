use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    controller::DateQuery,
    dto::{api::ErrorResponse, employee_assignment::EmployeeAssignmentDto},
    error::AppError,
    model::employee_assignment::EmployeeAssignment,
    service::employee_assignment::EmployeeAssignmentService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping employee assignment endpoints in OpenAPI documentation
pub static EMPLOYEE_ASSIGNMENT_TAG: &str = "employee-assignment";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByEmployeeQuery {
    pub employee_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByFlightQuery {
    pub flight_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Assign an employee to a flight on a date.
///
/// The employee and flight must exist, the employee must not already be
/// booked on that date, and their job must belong to an eligible department.
#[utoipa::path(
    post,
    path = "/employee-assignments",
    tag = EMPLOYEE_ASSIGNMENT_TAG,
    request_body = EmployeeAssignmentDto,
    responses(
        (status = 201, description = "Successfully created assignment", body = EmployeeAssignment),
        (status = 400, description = "Validation failure, double booking or ineligible job", body = ErrorResponse),
        (status = 404, description = "Employee or flight not found", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EmployeeAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let assignment =
        EmployeeAssignmentService::new(&state.db, &state.config.flight_crew_department_ids)
            .create(payload)
            .await?;

    let location = format!(
        "/employee-assignments/{}/{}/{}",
        assignment.id.employee_id, assignment.id.flight_id, assignment.id.date
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(assignment),
    ))
}

/// Get all employee assignments.
#[utoipa::path(
    get,
    path = "/employee-assignments",
    tag = EMPLOYEE_ASSIGNMENT_TAG,
    responses(
        (status = 200, description = "All employee assignments", body = [EmployeeAssignment])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let assignments =
        EmployeeAssignmentService::new(&state.db, &state.config.flight_crew_department_ids)
            .get_all()
            .await?;

    Ok(Json(assignments))
}

/// Get all employee assignments on one date.
#[utoipa::path(
    get,
    path = "/employee-assignments/by-date",
    tag = EMPLOYEE_ASSIGNMENT_TAG,
    params(
        ("date" = String, Query, description = "ISO-8601 date")
    ),
    responses(
        (status = 200, description = "Assignments on the date", body = [EmployeeAssignment])
    ),
)]
pub async fn get_by_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let assignments =
        EmployeeAssignmentService::new(&state.db, &state.config.flight_crew_department_ids)
            .get_by_date(query.date)
            .await?;

    Ok(Json(assignments))
}

/// Get one employee's assignments within an inclusive date range.
#[utoipa::path(
    get,
    path = "/employee-assignments/by-employee",
    tag = EMPLOYEE_ASSIGNMENT_TAG,
    params(
        ("employeeId" = i32, Query, description = "Employee ID"),
        ("startDate" = String, Query, description = "Start of the range (inclusive)"),
        ("endDate" = String, Query, description = "End of the range (inclusive)")
    ),
    responses(
        (status = 200, description = "Assignments in the range", body = [EmployeeAssignment])
    ),
)]
pub async fn get_by_employee(
    State(state): State<AppState>,
    Query(query): Query<ByEmployeeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let assignments =
        EmployeeAssignmentService::new(&state.db, &state.config.flight_crew_department_ids)
            .get_by_employee_and_date_range(query.employee_id, query.start_date, query.end_date)
            .await?;

    Ok(Json(assignments))
}

/// Get one flight's employee assignments within an inclusive date range.
#[utoipa::path(
    get,
    path = "/employee-assignments/by-flight",
    tag = EMPLOYEE_ASSIGNMENT_TAG,
    params(
        ("flightId" = i32, Query, description = "Flight ID"),
        ("startDate" = String, Query, description = "Start of the range (inclusive)"),
        ("endDate" = String, Query, description = "End of the range (inclusive)")
    ),
    responses(
        (status = 200, description = "Assignments in the range", body = [EmployeeAssignment])
    ),
)]
pub async fn get_by_flight(
    State(state): State<AppState>,
    Query(query): Query<ByFlightQuery>,
) -> Result<impl IntoResponse, AppError> {
    let assignments =
        EmployeeAssignmentService::new(&state.db, &state.config.flight_crew_department_ids)
            .get_by_flight_and_date_range(query.flight_id, query.start_date, query.end_date)
            .await?;

    Ok(Json(assignments))
}

/// Get an employee assignment by its composite key.
#[utoipa::path(
    get,
    path = "/employee-assignments/{employeeId}/{flightId}/{date}",
    tag = EMPLOYEE_ASSIGNMENT_TAG,
    params(
        ("employeeId" = i32, Path, description = "Employee ID"),
        ("flightId" = i32, Path, description = "Flight ID"),
        ("date" = String, Path, description = "ISO-8601 date")
    ),
    responses(
        (status = 200, description = "Assignment with the given key", body = EmployeeAssignment),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<(i32, i32, NaiveDate)>,
) -> Result<impl IntoResponse, AppError> {
    let assignment =
        EmployeeAssignmentService::new(&state.db, &state.config.flight_crew_department_ids)
            .get_by_id(id)
            .await?;

    Ok(Json(assignment))
}

/// Re-key an employee assignment. All business rules are re-validated.
#[utoipa::path(
    put,
    path = "/employee-assignments/{employeeId}/{flightId}/{date}",
    tag = EMPLOYEE_ASSIGNMENT_TAG,
    params(
        ("employeeId" = i32, Path, description = "Employee ID"),
        ("flightId" = i32, Path, description = "Flight ID"),
        ("date" = String, Path, description = "ISO-8601 date")
    ),
    request_body = EmployeeAssignmentDto,
    responses(
        (status = 200, description = "Updated assignment", body = EmployeeAssignment),
        (status = 400, description = "Validation failure, double booking or ineligible job", body = ErrorResponse),
        (status = 404, description = "Assignment, employee or flight not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<(i32, i32, NaiveDate)>,
    JsonBody(payload): JsonBody<EmployeeAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let assignment =
        EmployeeAssignmentService::new(&state.db, &state.config.flight_crew_department_ids)
            .update(id, payload)
            .await?;

    Ok(Json(assignment))
}

/// Delete an employee assignment by its composite key.
#[utoipa::path(
    delete,
    path = "/employee-assignments/{employeeId}/{flightId}/{date}",
    tag = EMPLOYEE_ASSIGNMENT_TAG,
    params(
        ("employeeId" = i32, Path, description = "Employee ID"),
        ("flightId" = i32, Path, description = "Flight ID"),
        ("date" = String, Path, description = "ISO-8601 date")
    ),
    responses(
        (status = 204, description = "Assignment deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<(i32, i32, NaiveDate)>,
) -> Result<impl IntoResponse, AppError> {
    EmployeeAssignmentService::new(&state.db, &state.config.flight_crew_department_ids)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
