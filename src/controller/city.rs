use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{api::ErrorResponse, city::CityDto},
    error::AppError,
    model::city::City,
    service::city::CityService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

/// Create a new city. The referenced country must exist.
#[utoipa::path(
    post,
    path = "/cities",
    tag = CITY_TAG,
    request_body = CityDto,
    responses(
        (status = 201, description = "Successfully created city", body = City),
        (status = 400, description = "Invalid city data or unknown country", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CityDto>,
) -> Result<impl IntoResponse, AppError> {
    let city = CityService::new(&state.db).create(payload).await?;

    let location = format!("/cities/{}", city.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(city),
    ))
}

/// Get all cities.
#[utoipa::path(
    get,
    path = "/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "All cities", body = [City])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cities = CityService::new(&state.db).get_all().await?;

    Ok(Json(cities))
}

/// Get a city by ID.
#[utoipa::path(
    get,
    path = "/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "City with the given ID", body = City),
        (status = 404, description = "City not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let city = CityService::new(&state.db).get_by_id(id).await?;

    Ok(Json(city))
}

/// Update a city.
#[utoipa::path(
    put,
    path = "/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    request_body = CityDto,
    responses(
        (status = 200, description = "Updated city", body = City),
        (status = 400, description = "Invalid city data or unknown country", body = ErrorResponse),
        (status = 404, description = "City not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<CityDto>,
) -> Result<impl IntoResponse, AppError> {
    let city = CityService::new(&state.db).update(id, payload).await?;

    Ok(Json(city))
}

/// Delete a city.
#[utoipa::path(
    delete,
    path = "/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 204, description = "City deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
