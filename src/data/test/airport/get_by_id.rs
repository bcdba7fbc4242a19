use super::*;

/// Tests fetching an airport by id with relations resolved.
///
/// Expected: Ok with Some(bundle)
#[tokio::test]
async fn gets_airport_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (country, city, airport) = factory::helpers::create_airport_with_dependencies(db).await?;

    let found = AirportRepository::new(db)
        .get_by_id(airport.id)
        .await?
        .unwrap();

    assert_eq!(found.airport.id, airport.id);
    assert_eq!(found.city.id, city.id);
    assert_eq!(found.country.id, country.id);

    Ok(())
}

/// Tests fetching an airport that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = AirportRepository::new(db).get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
