use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{api::ErrorResponse, flight::FlightDto},
    error::AppError,
    model::flight::Flight,
    service::flight::FlightService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Create a new flight.
///
/// The flight number must be unique and both endpoint airports must exist.
/// Departure and arrival may reference the same airport and times are not
/// ordered; overnight flights wrap past midnight.
#[utoipa::path(
    post,
    path = "/flights",
    tag = FLIGHT_TAG,
    request_body = FlightDto,
    responses(
        (status = 201, description = "Successfully created flight", body = Flight),
        (status = 400, description = "Invalid flight data, duplicate number or unknown airport", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<FlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db).create(payload).await?;

    let location = format!("/flights/{}", flight.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(flight),
    ))
}

/// Get all flights.
#[utoipa::path(
    get,
    path = "/flights",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "All flights", body = [Flight])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let flights = FlightService::new(&state.db).get_all().await?;

    Ok(Json(flights))
}

/// Get a flight by ID.
#[utoipa::path(
    get,
    path = "/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Flight with the given ID", body = Flight),
        (status = 404, description = "Flight not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db).get_by_id(id).await?;

    Ok(Json(flight))
}

/// Update a flight.
#[utoipa::path(
    put,
    path = "/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    request_body = FlightDto,
    responses(
        (status = 200, description = "Updated flight", body = Flight),
        (status = 400, description = "Invalid flight data, duplicate number or unknown airport", body = ErrorResponse),
        (status = 404, description = "Flight not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<FlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db).update(id, payload).await?;

    Ok(Json(flight))
}

/// Delete a flight.
#[utoipa::path(
    delete,
    path = "/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 204, description = "Flight deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FlightService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
