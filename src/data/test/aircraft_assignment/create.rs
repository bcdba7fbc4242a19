use super::*;

/// Tests creating a new aircraft assignment.
///
/// Verifies that the returned bundle resolves the aircraft and the full
/// flight chain down to the route's airports.
///
/// Expected: Ok with aircraft and flight resolved
#[tokio::test]
async fn creates_assignment_with_resolved_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let (_, _, departure, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let relations = AircraftAssignmentRepository::new(db)
        .create(AircraftAssignmentParams {
            aircraft_id: aircraft.id,
            flight_id: flight.id,
            date: date(1),
        })
        .await?;

    assert_eq!(relations.assignment.aircraft_id, aircraft.id);
    assert_eq!(relations.assignment.flight_id, flight.id);
    assert_eq!(relations.assignment.date, date(1));
    assert_eq!(relations.aircraft.id, aircraft.id);
    assert_eq!(relations.flight.flight.id, flight.id);
    assert_eq!(relations.flight.departure_airport.airport.id, departure.id);

    Ok(())
}

/// Tests that inserting the same composite key twice fails.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_composite_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let repo = AircraftAssignmentRepository::new(db);
    repo.create(AircraftAssignmentParams {
        aircraft_id: aircraft.id,
        flight_id: flight.id,
        date: date(1),
    })
    .await?;

    let duplicate = repo
        .create(AircraftAssignmentParams {
            aircraft_id: aircraft.id,
            flight_id: flight.id,
            date: date(1),
        })
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
