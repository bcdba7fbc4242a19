use super::*;

/// Tests fetching a country by id.
///
/// Expected: Ok with Some(country)
#[tokio::test]
async fn gets_country_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::country::create_country(db).await?;

    let found = CountryRepository::new(db).get_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests fetching a country that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = CountryRepository::new(db).get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
