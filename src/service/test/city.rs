use crate::dto::city::CityDto;
use crate::error::AppError;
use crate::service::city::CityService;
use test_utils::{builder::TestBuilder, factory};

fn dto(name: &str, country_id: i32) -> CityDto {
    CityDto {
        name: name.to_string(),
        country_id: Some(country_id),
    }
}

/// Tests creating a city with its country resolved in the response.
///
/// Expected: Ok with the nested country populated
#[tokio::test]
async fn create_resolves_country() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db)
        .await
        .map_err(AppError::DbErr)?;

    let city = CityService::new(db).create(dto("Lisbon", country.id)).await?;

    assert_eq!(city.name, "Lisbon");
    assert_eq!(city.country.id, country.id);

    Ok(())
}

/// Tests that a broken country reference is a domain error, not a 404.
///
/// Expected: BadRequest naming the missing country
#[tokio::test]
async fn create_rejects_missing_country() {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CityService::new(db).create(dto("Lisbon", 99)).await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "Country with ID 99 does not exist");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

/// Tests that existence is checked before the country reference on update.
///
/// Updating a missing city with a broken reference reports the missing city.
///
/// Expected: NotFound
#[tokio::test]
async fn update_checks_existence_before_reference() {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CityService::new(db).update(999, dto("Lisbon", 99)).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "City with ID 999 not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

/// Tests moving a city to another country.
///
/// Expected: Ok with the new country resolved
#[tokio::test]
async fn update_moves_city_between_countries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db)
        .await
        .map_err(AppError::DbErr)?;
    let other = factory::country::create_country(db)
        .await
        .map_err(AppError::DbErr)?;

    let service = CityService::new(db);
    let city = service.create(dto("Lisbon", country.id)).await?;

    let updated = service.update(city.id, dto("Lisbon", other.id)).await?;

    assert_eq!(updated.country.id, other.id);

    Ok(())
}
