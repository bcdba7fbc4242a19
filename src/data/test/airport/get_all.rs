use super::*;

/// Tests listing airports across different cities and countries.
///
/// The relation loading is batched, so each airport must still come back
/// with its own city and country.
///
/// Expected: Ok with each airport paired to the right city and country
#[tokio::test]
async fn resolves_relations_for_airports_in_different_countries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (country_a, city_a, airport_a) = factory::helpers::create_airport_with_dependencies(db).await?;
    let (country_b, city_b, airport_b) = factory::helpers::create_airport_with_dependencies(db).await?;

    let airports = AirportRepository::new(db).get_all().await?;

    assert_eq!(airports.len(), 2);

    let first = airports.iter().find(|a| a.airport.id == airport_a.id).unwrap();
    assert_eq!(first.city.id, city_a.id);
    assert_eq!(first.country.id, country_a.id);

    let second = airports.iter().find(|a| a.airport.id == airport_b.id).unwrap();
    assert_eq!(second.city.id, city_b.id);
    assert_eq!(second.country.id, country_b.id);

    Ok(())
}
