use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::{DateQuery, DateRangeQuery},
    dto::{aircraft::AircraftDto, api::ErrorResponse},
    error::AppError,
    model::aircraft::Aircraft,
    service::aircraft::AircraftService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping aircraft endpoints in OpenAPI documentation
pub static AIRCRAFT_TAG: &str = "aircraft";

/// Create a new aircraft. The tail registration must be unique.
#[utoipa::path(
    post,
    path = "/aircraft",
    tag = AIRCRAFT_TAG,
    request_body = AircraftDto,
    responses(
        (status = 201, description = "Successfully created aircraft", body = Aircraft),
        (status = 400, description = "Invalid aircraft data or duplicate registration", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AircraftDto>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db).create(payload).await?;

    let location = format!("/aircraft/{}", aircraft.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(aircraft),
    ))
}

/// Get all aircraft.
#[utoipa::path(
    get,
    path = "/aircraft",
    tag = AIRCRAFT_TAG,
    responses(
        (status = 200, description = "All aircraft", body = [Aircraft])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db).get_all().await?;

    Ok(Json(aircraft))
}

/// Get aircraft with no assignment on the given date.
#[utoipa::path(
    get,
    path = "/aircraft/available",
    tag = AIRCRAFT_TAG,
    params(
        ("date" = String, Query, description = "ISO-8601 date to check availability for")
    ),
    responses(
        (status = 200, description = "Aircraft available on the date", body = [Aircraft])
    ),
)]
pub async fn get_available(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db)
        .get_available_by_date(query.date)
        .await?;

    Ok(Json(aircraft))
}

/// Get an aircraft by ID.
#[utoipa::path(
    get,
    path = "/aircraft/{id}",
    tag = AIRCRAFT_TAG,
    params(
        ("id" = i32, Path, description = "Aircraft ID")
    ),
    responses(
        (status = 200, description = "Aircraft with the given ID", body = Aircraft),
        (status = 404, description = "Aircraft not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db).get_by_id(id).await?;

    Ok(Json(aircraft))
}

/// Get the dates within an inclusive range on which the aircraft has no
/// assignment, in chronological order.
#[utoipa::path(
    get,
    path = "/aircraft/{id}/availabilities",
    tag = AIRCRAFT_TAG,
    params(
        ("id" = i32, Path, description = "Aircraft ID"),
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
    let dates = AircraftService::new(&state.db)
        .get_availabilities(id, query.start_date, query.end_date)
        .await?;

    Ok(Json(dates))
}

/// Update an aircraft.
#[utoipa::path(
    put,
    path = "/aircraft/{id}",
    tag = AIRCRAFT_TAG,
    params(
        ("id" = i32, Path, description = "Aircraft ID")
    ),
    request_body = AircraftDto,
    responses(
        (status = 200, description = "Updated aircraft", body = Aircraft),
        (status = 400, description = "Invalid aircraft data or duplicate registration", body = ErrorResponse),
        (status = 404, description = "Aircraft not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<AircraftDto>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db).update(id, payload).await?;

    Ok(Json(aircraft))
}

/// Delete an aircraft.
#[utoipa::path(
    delete,
    path = "/aircraft/{id}",
    tag = AIRCRAFT_TAG,
    params(
        ("id" = i32, Path, description = "Aircraft ID")
    ),
    responses(
        (status = 204, description = "Aircraft deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AircraftService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
