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
    dto::{aircraft_assignment::AircraftAssignmentDto, api::ErrorResponse},
    error::AppError,
    model::aircraft_assignment::AircraftAssignment,
    service::aircraft_assignment::AircraftAssignmentService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping aircraft assignment endpoints in OpenAPI documentation
pub static AIRCRAFT_ASSIGNMENT_TAG: &str = "aircraft-assignment";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByAircraftQuery {
    pub aircraft_id: i32,
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

/// Assign an aircraft to a flight on a date.
///
/// The aircraft and flight must exist, the aircraft must not already be
/// booked on that date, and its range must cover the flight distance.
#[utoipa::path(
    post,
    path = "/aircraft-assignments",
    tag = AIRCRAFT_ASSIGNMENT_TAG,
    request_body = AircraftAssignmentDto,
    responses(
        (status = 201, description = "Successfully created assignment", body = AircraftAssignment),
        (status = 400, description = "Validation failure, double booking or insufficient range", body = ErrorResponse),
        (status = 404, description = "Aircraft or flight not found", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AircraftAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = AircraftAssignmentService::new(&state.db)
        .create(payload)
        .await?;

    let location = format!(
        "/aircraft-assignments/{}/{}/{}",
        assignment.id.aircraft_id, assignment.id.flight_id, assignment.id.date
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(assignment),
    ))
}

/// Get all aircraft assignments.
#[utoipa::path(
    get,
    path = "/aircraft-assignments",
    tag = AIRCRAFT_ASSIGNMENT_TAG,
    responses(
        (status = 200, description = "All aircraft assignments", body = [AircraftAssignment])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let assignments = AircraftAssignmentService::new(&state.db).get_all().await?;

    Ok(Json(assignments))
}

/// Get all aircraft assignments on one date.
#[utoipa::path(
    get,
    path = "/aircraft-assignments/by-date",
    tag = AIRCRAFT_ASSIGNMENT_TAG,
    params(
        ("date" = String, Query, description = "ISO-8601 date")
    ),
    responses(
        (status = 200, description = "Assignments on the date", body = [AircraftAssignment])
    ),
)]
pub async fn get_by_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = AircraftAssignmentService::new(&state.db)
        .get_by_date(query.date)
        .await?;

    Ok(Json(assignments))
}

/// Get one aircraft's assignments within an inclusive date range.
#[utoipa::path(
    get,
    path = "/aircraft-assignments/by-aircraft",
    tag = AIRCRAFT_ASSIGNMENT_TAG,
    params(
        ("aircraftId" = i32, Query, description = "Aircraft ID"),
        ("startDate" = String, Query, description = "Start of the range (inclusive)"),
        ("endDate" = String, Query, description = "End of the range (inclusive)")
    ),
    responses(
        (status = 200, description = "Assignments in the range", body = [AircraftAssignment])
    ),
)]
pub async fn get_by_aircraft(
    State(state): State<AppState>,
    Query(query): Query<ByAircraftQuery>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = AircraftAssignmentService::new(&state.db)
        .get_by_aircraft_and_date_range(query.aircraft_id, query.start_date, query.end_date)
        .await?;

    Ok(Json(assignments))
}

/// Get one flight's aircraft assignments within an inclusive date range.
#[utoipa::path(
    get,
    path = "/aircraft-assignments/by-flight",
    tag = AIRCRAFT_ASSIGNMENT_TAG,
    params(
        ("flightId" = i32, Query, description = "Flight ID"),
        ("startDate" = String, Query, description = "Start of the range (inclusive)"),
        ("endDate" = String, Query, description = "End of the range (inclusive)")
    ),
    responses(
        (status = 200, description = "Assignments in the range", body = [AircraftAssignment])
    ),
)]
pub async fn get_by_flight(
    State(state): State<AppState>,
    Query(query): Query<ByFlightQuery>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = AircraftAssignmentService::new(&state.db)
        .get_by_flight_and_date_range(query.flight_id, query.start_date, query.end_date)
        .await?;

    Ok(Json(assignments))
}

/// Get an aircraft assignment by its composite key.
#[utoipa::path(
    get,
    path = "/aircraft-assignments/{aircraftId}/{flightId}/{date}",
    tag = AIRCRAFT_ASSIGNMENT_TAG,
    params(
        ("aircraftId" = i32, Path, description = "Aircraft ID"),
        ("flightId" = i32, Path, description = "Flight ID"),
        ("date" = String, Path, description = "ISO-8601 date")
    ),
    responses(
        (status = 200, description = "Assignment with the given key", body = AircraftAssignment),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<(i32, i32, NaiveDate)>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = AircraftAssignmentService::new(&state.db)
        .get_by_id(id)
        .await?;

    Ok(Json(assignment))
}

/// Re-key an aircraft assignment. All business rules are re-validated.
#[utoipa::path(
    put,
    path = "/aircraft-assignments/{aircraftId}/{flightId}/{date}",
    tag = AIRCRAFT_ASSIGNMENT_TAG,
    params(
        ("aircraftId" = i32, Path, description = "Aircraft ID"),
        ("flightId" = i32, Path, description = "Flight ID"),
        ("date" = String, Path, description = "ISO-8601 date")
    ),
    request_body = AircraftAssignmentDto,
    responses(
        (status = 200, description = "Updated assignment", body = AircraftAssignment),
        (status = 400, description = "Validation failure, double booking or insufficient range", body = ErrorResponse),
        (status = 404, description = "Assignment, aircraft or flight not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<(i32, i32, NaiveDate)>,
    JsonBody(payload): JsonBody<AircraftAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = AircraftAssignmentService::new(&state.db)
        .update(id, payload)
        .await?;

    Ok(Json(assignment))
}

/// Delete an aircraft assignment by its composite key.
#[utoipa::path(
    delete,
    path = "/aircraft-assignments/{aircraftId}/{flightId}/{date}",
    tag = AIRCRAFT_ASSIGNMENT_TAG,
    params(
        ("aircraftId" = i32, Path, description = "Aircraft ID"),
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
    AircraftAssignmentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
