use super::*;

/// Tests updating both fields of a country.
///
/// Expected: Ok with the new name and code persisted
#[tokio::test]
async fn updates_country_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::country::create_country(db).await?;

    let repo = CountryRepository::new(db);
    let updated = repo
        .update(
            created.id,
            CountryParams {
                name: "Iceland".to_string(),
                code: "IS".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Iceland");
    assert_eq!(updated.code, "IS");

    let reloaded = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded.name, "Iceland");

    Ok(())
}

/// Tests updating a country that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_when_country_missing() {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CountryRepository::new(db)
        .update(
            999,
            CountryParams {
                name: "Nowhere".to_string(),
                code: "NW".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
