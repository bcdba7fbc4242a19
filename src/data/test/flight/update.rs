use super::*;

/// Tests re-routing a flight to different airports.
///
/// Expected: Ok with the new route resolved
#[tokio::test]
async fn reroutes_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_, _, new_departure) = factory::helpers::create_airport_with_dependencies(db).await?;
    let (_, _, new_arrival) = factory::helpers::create_airport_with_dependencies(db).await?;

    let updated = FlightRepository::new(db)
        .update(
            flight.id,
            FlightParams {
                number: flight.number.clone(),
                departure_airport_id: new_departure.id,
                arrival_airport_id: new_arrival.id,
                departure_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                arrival_time: NaiveTime::from_hms_opt(17, 20, 0).unwrap(),
                distance: 3100,
            },
        )
        .await?;

    assert_eq!(updated.flight.id, flight.id);
    assert_eq!(updated.flight.distance, 3100);
    assert_eq!(updated.departure_airport.airport.id, new_departure.id);
    assert_eq!(updated.arrival_airport.airport.id, new_arrival.id);

    Ok(())
}

/// Tests updating a flight that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_when_flight_missing() {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FlightRepository::new(db)
        .update(
            999,
            FlightParams {
                number: "SB0000".to_string(),
                departure_airport_id: 1,
                arrival_airport_id: 2,
                departure_time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
                arrival_time: NaiveTime::from_hms_opt(1, 0, 0).unwrap(),
                distance: 100,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
