use super::*;

/// Tests deleting a country.
///
/// Expected: Ok, and the country can no longer be fetched
#[tokio::test]
async fn deletes_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::country::create_country(db).await?;

    let repo = CountryRepository::new(db);
    repo.delete(created.id).await?;

    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a country that does not exist.
///
/// Deletes are idempotent at the repository level.
///
/// Expected: Ok
#[tokio::test]
async fn deleting_missing_country_is_ok() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CountryRepository::new(db).delete(999).await?;

    Ok(())
}
