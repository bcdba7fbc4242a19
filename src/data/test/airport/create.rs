use super::*;

/// Tests creating a new airport.
///
/// Verifies that the repository persists the airport and resolves its city
/// and country in the returned bundle.
///
/// Expected: Ok with airport, city, and country resolved
#[tokio::test]
async fn creates_airport_with_resolved_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await?;
    let city = factory::city::create_city(db, country.id).await?;

    let repo = AirportRepository::new(db);
    let relations = repo
        .create(AirportParams {
            name: "Humberto Delgado".to_string(),
            code: "LIS".to_string(),
            city_id: city.id,
        })
        .await?;

    assert!(relations.airport.id > 0);
    assert_eq!(relations.airport.code, "LIS");
    assert_eq!(relations.city.id, city.id);
    assert_eq!(relations.country.id, country.id);

    Ok(())
}

/// Tests that a created airport can be found by its code.
///
/// Expected: Ok with Some(airport), and None for an unknown code
#[tokio::test]
async fn finds_created_airport_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_airport_with_dependencies(db).await?;

    let repo = AirportRepository::new(db);
    let found = repo.get_by_code(&created.code).await?;

    assert_eq!(found.map(|a| a.id), Some(created.id));
    assert!(repo.get_by_code("ZZZ").await?.is_none());

    Ok(())
}
