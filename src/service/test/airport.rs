use crate::dto::airport::AirportDto;
use crate::error::AppError;
use crate::service::airport::AirportService;
use test_utils::{builder::TestBuilder, factory};

fn dto(name: &str, code: &str, city_id: i32) -> AirportDto {
    AirportDto {
        name: name.to_string(),
        code: code.to_string(),
        city_id: Some(city_id),
    }
}

/// Tests that creating an airport with an already-used code fails.
///
/// Expected: BadRequest naming the conflicting code
#[tokio::test]
async fn create_rejects_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db)
        .await
        .map_err(AppError::DbErr)?;
    let city = factory::city::create_city(db, country.id)
        .await
        .map_err(AppError::DbErr)?;

    let service = AirportService::new(db);
    service.create(dto("Lisbon Airport", "LIS", city.id)).await?;

    let result = service.create(dto("Lisbon Humberto Delgado", "LIS", city.id)).await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "Airport with code LIS already exists");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }

    Ok(())
}

/// Tests that a broken city reference is a domain error.
///
/// Expected: BadRequest naming the missing city
#[tokio::test]
async fn create_rejects_missing_city() {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AirportService::new(db)
        .create(dto("Lisbon Airport", "LIS", 99))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "City with ID 99 does not exist"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

/// Tests that an airport may keep its own code on update.
///
/// Expected: Ok with the new name persisted
#[tokio::test]
async fn update_allows_own_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city, airport) = factory::helpers::create_airport_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;

    let updated = AirportService::new(db)
        .update(airport.id, dto("Renamed Field", &airport.code, city.id))
        .await?;

    assert_eq!(updated.name, "Renamed Field");
    assert_eq!(updated.code, airport.code);

    Ok(())
}
