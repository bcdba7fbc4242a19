use super::*;

/// Tests fetching a flight by id with its route resolved.
///
/// Expected: Ok with Some(bundle)
#[tokio::test]
async fn gets_flight_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, departure, arrival, flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let found = FlightRepository::new(db).get_by_id(flight.id).await?.unwrap();

    assert_eq!(found.flight.id, flight.id);
    assert_eq!(found.departure_airport.airport.id, departure.id);
    assert_eq!(found.arrival_airport.airport.id, arrival.id);

    Ok(())
}

/// Tests fetching a flight that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = FlightRepository::new(db).get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
