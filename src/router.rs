//! Axum route configuration and OpenAPI documentation.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        aircraft, aircraft_assignment, airport, city, country, department, employee,
        employee_assignment, flight, job,
    },
    error,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        country::create,
        country::get_all,
        country::get_by_id,
        country::update,
        country::delete,
        city::create,
        city::get_all,
        city::get_by_id,
        city::update,
        city::delete,
        airport::create,
        airport::get_all,
        airport::get_by_id,
        airport::update,
        airport::delete,
        department::create,
        department::get_all,
        department::get_by_id,
        department::update,
        department::delete,
        job::create,
        job::get_all,
        job::get_by_id,
        job::update,
        job::delete,
        employee::create,
        employee::get_all,
        employee::get_available,
        employee::get_by_id,
        employee::get_availabilities,
        employee::update,
        employee::delete,
        aircraft::create,
        aircraft::get_all,
        aircraft::get_available,
        aircraft::get_by_id,
        aircraft::get_availabilities,
        aircraft::update,
        aircraft::delete,
        flight::create,
        flight::get_all,
        flight::get_by_id,
        flight::update,
        flight::delete,
        aircraft_assignment::create,
        aircraft_assignment::get_all,
        aircraft_assignment::get_by_date,
        aircraft_assignment::get_by_aircraft,
        aircraft_assignment::get_by_flight,
        aircraft_assignment::get_by_id,
        aircraft_assignment::update,
        aircraft_assignment::delete,
        employee_assignment::create,
        employee_assignment::get_all,
        employee_assignment::get_by_date,
        employee_assignment::get_by_employee,
        employee_assignment::get_by_flight,
        employee_assignment::get_by_id,
        employee_assignment::update,
        employee_assignment::delete,
    ),
    components(schemas(
        crate::dto::api::ErrorResponse,
        crate::dto::aircraft::AircraftDto,
        crate::dto::aircraft_assignment::AircraftAssignmentDto,
        crate::dto::airport::AirportDto,
        crate::dto::city::CityDto,
        crate::dto::country::CountryDto,
        crate::dto::department::DepartmentDto,
        crate::dto::employee::EmployeeDto,
        crate::dto::employee_assignment::EmployeeAssignmentDto,
        crate::dto::flight::FlightDto,
        crate::dto::job::JobDto,
        crate::model::aircraft::Aircraft,
        crate::model::aircraft_assignment::AircraftAssignment,
        crate::model::aircraft_assignment::AircraftAssignmentId,
        crate::model::airport::Airport,
        crate::model::city::City,
        crate::model::country::Country,
        crate::model::department::Department,
        crate::model::employee::Employee,
        crate::model::employee_assignment::EmployeeAssignment,
        crate::model::employee_assignment::EmployeeAssignmentId,
        crate::model::flight::Flight,
        crate::model::job::Job,
    ))
)]
struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/countries", post(country::create).get(country::get_all))
        .route(
            "/countries/{id}",
            get(country::get_by_id)
                .put(country::update)
                .delete(country::delete),
        )
        .route("/cities", post(city::create).get(city::get_all))
        .route(
            "/cities/{id}",
            get(city::get_by_id).put(city::update).delete(city::delete),
        )
        .route("/airports", post(airport::create).get(airport::get_all))
        .route(
            "/airports/{id}",
            get(airport::get_by_id)
                .put(airport::update)
                .delete(airport::delete),
        )
        .route(
            "/departments",
            post(department::create).get(department::get_all),
        )
        .route(
            "/departments/{id}",
            get(department::get_by_id)
                .put(department::update)
                .delete(department::delete),
        )
        .route("/jobs", post(job::create).get(job::get_all))
        .route(
            "/jobs/{id}",
            get(job::get_by_id).put(job::update).delete(job::delete),
        )
        .route("/employees", post(employee::create).get(employee::get_all))
        .route("/employees/available", get(employee::get_available))
        .route(
            "/employees/{id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
        .route(
            "/employees/{id}/availabilities",
            get(employee::get_availabilities),
        )
        .route("/aircraft", post(aircraft::create).get(aircraft::get_all))
        .route("/aircraft/available", get(aircraft::get_available))
        .route(
            "/aircraft/{id}",
            get(aircraft::get_by_id)
                .put(aircraft::update)
                .delete(aircraft::delete),
        )
        .route(
            "/aircraft/{id}/availabilities",
            get(aircraft::get_availabilities),
        )
        .route("/flights", post(flight::create).get(flight::get_all))
        .route(
            "/flights/{id}",
            get(flight::get_by_id)
                .put(flight::update)
                .delete(flight::delete),
        )
        .route(
            "/aircraft-assignments",
            post(aircraft_assignment::create).get(aircraft_assignment::get_all),
        )
        .route(
            "/aircraft-assignments/by-date",
            get(aircraft_assignment::get_by_date),
        )
        .route(
            "/aircraft-assignments/by-aircraft",
            get(aircraft_assignment::get_by_aircraft),
        )
        .route(
            "/aircraft-assignments/by-flight",
            get(aircraft_assignment::get_by_flight),
        )
        .route(
            "/aircraft-assignments/{aircraftId}/{flightId}/{date}",
            get(aircraft_assignment::get_by_id)
                .put(aircraft_assignment::update)
                .delete(aircraft_assignment::delete),
        )
        .route(
            "/employee-assignments",
            post(employee_assignment::create).get(employee_assignment::get_all),
        )
        .route(
            "/employee-assignments/by-date",
            get(employee_assignment::get_by_date),
        )
        .route(
            "/employee-assignments/by-employee",
            get(employee_assignment::get_by_employee),
        )
        .route(
            "/employee-assignments/by-flight",
            get(employee_assignment::get_by_flight),
        )
        .route(
            "/employee-assignments/{employeeId}/{flightId}/{date}",
            get(employee_assignment::get_by_id)
                .put(employee_assignment::update)
                .delete(employee_assignment::delete),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(error::error_envelope))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
