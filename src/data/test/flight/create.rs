use super::*;

/// Tests creating a new flight.
///
/// Verifies that both route endpoints come back fully resolved, each with
/// its own city and country chain.
///
/// Expected: Ok with departure and arrival airports resolved
#[tokio::test]
async fn creates_flight_with_resolved_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (country_a, city_a, departure) = factory::helpers::create_airport_with_dependencies(db).await?;
    let (country_b, city_b, arrival) = factory::helpers::create_airport_with_dependencies(db).await?;

    let relations = FlightRepository::new(db)
        .create(FlightParams {
            number: "SB1001".to_string(),
            departure_airport_id: departure.id,
            arrival_airport_id: arrival.id,
            departure_time: NaiveTime::from_hms_opt(6, 15, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(9, 45, 0).unwrap(),
            distance: 2400,
        })
        .await?;

    assert!(relations.flight.id > 0);
    assert_eq!(relations.flight.number, "SB1001");
    assert_eq!(relations.departure_airport.airport.id, departure.id);
    assert_eq!(relations.departure_airport.city.id, city_a.id);
    assert_eq!(relations.departure_airport.country.id, country_a.id);
    assert_eq!(relations.arrival_airport.airport.id, arrival.id);
    assert_eq!(relations.arrival_airport.city.id, city_b.id);
    assert_eq!(relations.arrival_airport.country.id, country_b.id);

    Ok(())
}
