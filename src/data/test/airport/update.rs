use super::*;

/// Tests moving an airport to a city in another country.
///
/// Expected: Ok with the new city and country resolved
#[tokio::test]
async fn moves_airport_to_another_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, airport) = factory::helpers::create_airport_with_dependencies(db).await?;
    let other_country = factory::country::create_country(db).await?;
    let other_city = factory::city::create_city(db, other_country.id).await?;

    let updated = AirportRepository::new(db)
        .update(
            airport.id,
            AirportParams {
                name: airport.name.clone(),
                code: airport.code.clone(),
                city_id: other_city.id,
            },
        )
        .await?;

    assert_eq!(updated.airport.id, airport.id);
    assert_eq!(updated.city.id, other_city.id);
    assert_eq!(updated.country.id, other_country.id);

    Ok(())
}

/// Tests updating an airport that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_when_airport_missing() {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AirportRepository::new(db)
        .update(
            999,
            AirportParams {
                name: "Nowhere International".to_string(),
                code: "NWI".to_string(),
                city_id: 1,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
