use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{airport::AirportDto, api::ErrorResponse},
    error::AppError,
    model::airport::Airport,
    service::airport::AirportService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping airport endpoints in OpenAPI documentation
pub static AIRPORT_TAG: &str = "airport";

/// Create a new airport.
///
/// The three-letter code must be unique and the referenced city must exist.
#[utoipa::path(
    post,
    path = "/airports",
    tag = AIRPORT_TAG,
    request_body = AirportDto,
    responses(
        (status = 201, description = "Successfully created airport", body = Airport),
        (status = 400, description = "Invalid airport data, duplicate code or unknown city", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AirportDto>,
) -> Result<impl IntoResponse, AppError> {
    let airport = AirportService::new(&state.db).create(payload).await?;

    let location = format!("/airports/{}", airport.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(airport),
    ))
}

/// Get all airports.
#[utoipa::path(
    get,
    path = "/airports",
    tag = AIRPORT_TAG,
    responses(
        (status = 200, description = "All airports", body = [Airport])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airports = AirportService::new(&state.db).get_all().await?;

    Ok(Json(airports))
}

/// Get an airport by ID.
#[utoipa::path(
    get,
    path = "/airports/{id}",
    tag = AIRPORT_TAG,
    params(
        ("id" = i32, Path, description = "Airport ID")
    ),
    responses(
        (status = 200, description = "Airport with the given ID", body = Airport),
        (status = 404, description = "Airport not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let airport = AirportService::new(&state.db).get_by_id(id).await?;

    Ok(Json(airport))
}

/// Update an airport.
#[utoipa::path(
    put,
    path = "/airports/{id}",
    tag = AIRPORT_TAG,
    params(
        ("id" = i32, Path, description = "Airport ID")
    ),
    request_body = AirportDto,
    responses(
        (status = 200, description = "Updated airport", body = Airport),
        (status = 400, description = "Invalid airport data, duplicate code or unknown city", body = ErrorResponse),
        (status = 404, description = "Airport not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<AirportDto>,
) -> Result<impl IntoResponse, AppError> {
    let airport = AirportService::new(&state.db).update(id, payload).await?;

    Ok(Json(airport))
}

/// Delete an airport.
#[utoipa::path(
    delete,
    path = "/airports/{id}",
    tag = AIRPORT_TAG,
    params(
        ("id" = i32, Path, description = "Airport ID")
    ),
    responses(
        (status = 204, description = "Airport deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AirportService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
