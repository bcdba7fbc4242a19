use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{api::ErrorResponse, country::CountryDto},
    error::AppError,
    model::country::Country,
    service::country::CountryService,
    state::AppState,
    util::extract::JsonBody,
};

/// Tag for grouping country endpoints in OpenAPI documentation
pub static COUNTRY_TAG: &str = "country";

/// Create a new country.
///
/// The two-letter country code must be unique; creating a country with a code
/// that is already taken fails with a 400.
///
/// # Returns
/// - `201 Created` - Created country, with a `Location` header
/// - `400 Bad Request` - Validation failure or duplicate code
#[utoipa::path(
    post,
    path = "/countries",
    tag = COUNTRY_TAG,
    request_body = CountryDto,
    responses(
        (status = 201, description = "Successfully created country", body = Country),
        (status = 400, description = "Invalid country data or duplicate code", body = ErrorResponse)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let country = CountryService::new(&state.db).create(payload).await?;

    let location = format!("/countries/{}", country.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(country),
    ))
}

/// Get all countries.
#[utoipa::path(
    get,
    path = "/countries",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "All countries", body = [Country])
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let countries = CountryService::new(&state.db).get_all().await?;

    Ok(Json(countries))
}

/// Get a country by ID.
#[utoipa::path(
    get,
    path = "/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Country with the given ID", body = Country),
        (status = 404, description = "Country not found", body = ErrorResponse)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let country = CountryService::new(&state.db).get_by_id(id).await?;

    Ok(Json(country))
}

/// Update a country.
#[utoipa::path(
    put,
    path = "/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    request_body = CountryDto,
    responses(
        (status = 200, description = "Updated country", body = Country),
        (status = 400, description = "Invalid country data or duplicate code", body = ErrorResponse),
        (status = 404, description = "Country not found", body = ErrorResponse)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<CountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let country = CountryService::new(&state.db).update(id, payload).await?;

    Ok(Json(country))
}

/// Delete a country.
#[utoipa::path(
    delete,
    path = "/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 204, description = "Country deleted")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CountryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
