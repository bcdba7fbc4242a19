use super::*;

/// Tests listing countries in id order.
///
/// Expected: Ok with all countries sorted by ascending id
#[tokio::test]
async fn returns_countries_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::country::create_country(db).await?;
    let second = factory::country::create_country(db).await?;

    let countries = CountryRepository::new(db).get_all().await?;

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].id, first.id);
    assert_eq!(countries[1].id, second.id);

    Ok(())
}

/// Tests listing countries when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list_when_no_countries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let countries = CountryRepository::new(db).get_all().await?;

    assert!(countries.is_empty());

    Ok(())
}
