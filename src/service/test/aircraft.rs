use crate::dto::aircraft::AircraftDto;
use crate::error::AppError;
use crate::service::aircraft::AircraftService;
use chrono::NaiveDate;
use entity::prelude::Aircraft;
use test_utils::{builder::TestBuilder, factory};

fn dto(registration: &str) -> AircraftDto {
    AircraftDto {
        registration: registration.to_string(),
        aircraft_type: "A320".to_string(),
        range: 6000,
        capacity: 180,
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

/// Tests that creating an aircraft with a taken registration fails.
///
/// Expected: BadRequest naming the conflicting registration
#[tokio::test]
async fn create_rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Aircraft)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AircraftService::new(db);
    service.create(dto("N12345")).await?;

    let result = service.create(dto("N12345")).await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "Aircraft with registration N12345 already exists");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }

    Ok(())
}

/// Tests that an aircraft may keep its own registration on update.
///
/// Expected: Ok with the other fields updated
#[tokio::test]
async fn update_allows_own_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Aircraft)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AircraftService::new(db);
    let created = service.create(dto("N12345")).await?;

    let mut payload = dto("N12345");
    payload.capacity = 220;
    let updated = service.update(created.id, payload).await?;

    assert_eq!(updated.registration, "N12345");
    assert_eq!(updated.capacity, 220);

    Ok(())
}

/// Tests an invalid aircraft body.
///
/// Missing numeric fields default to zero and fail the positive checks.
///
/// Expected: Validation with one message per failing field
#[tokio::test]
async fn create_collects_all_validation_messages() {
    let test = TestBuilder::new()
        .with_table(Aircraft)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AircraftService::new(db)
        .create(AircraftDto {
            registration: String::new(),
            aircraft_type: String::new(),
            range: 0,
            capacity: 0,
        })
        .await;

    match result {
        Err(AppError::Validation(messages)) => {
            assert_eq!(
                messages,
                vec![
                    "Aircraft registration must not be blank",
                    "Aircraft type must not be blank",
                    "Range must be positive",
                    "Capacity must be positive",
                ]
            );
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

/// Tests the per-aircraft availability calendar.
///
/// Expected: Ok with the assigned day missing
#[tokio::test]
async fn availabilities_skip_assigned_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db)
        .await
        .map_err(AppError::DbErr)?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;
    factory::aircraft_assignment::create_aircraft_assignment(db, aircraft.id, flight.id, date(2))
        .await
        .map_err(AppError::DbErr)?;

    let availabilities = AircraftService::new(db)
        .get_availabilities(aircraft.id, date(1), date(3))
        .await?;

    assert_eq!(availabilities, vec![date(1), date(3)]);

    Ok(())
}

/// Tests listing aircraft free on a date.
///
/// Expected: Ok without the aircraft assigned on that date
#[tokio::test]
async fn available_by_date_excludes_assigned_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::aircraft::create_aircraft(db)
        .await
        .map_err(AppError::DbErr)?;
    let free = factory::aircraft::create_aircraft(db)
        .await
        .map_err(AppError::DbErr)?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;
    factory::aircraft_assignment::create_aircraft_assignment(db, busy.id, flight.id, date(1))
        .await
        .map_err(AppError::DbErr)?;

    let available = AircraftService::new(db).get_available_by_date(date(1)).await?;

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, free.id);

    Ok(())
}
