use super::*;

/// Tests creating a new country.
///
/// Verifies that the repository persists the name and code and assigns an id.
///
/// Expected: Ok with country created
#[tokio::test]
async fn creates_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CountryRepository::new(db);
    let country = repo
        .create(CountryParams {
            name: "Portugal".to_string(),
            code: "PT".to_string(),
        })
        .await?;

    assert!(country.id > 0);
    assert_eq!(country.name, "Portugal");
    assert_eq!(country.code, "PT");

    Ok(())
}

/// Tests that a created country can be found by its code.
///
/// Expected: Ok with Some(country)
#[tokio::test]
async fn finds_created_country_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::country::create_country(db).await?;

    let repo = CountryRepository::new(db);
    let found = repo.get_by_code(&created.code).await?;

    assert_eq!(found.map(|c| c.id), Some(created.id));

    let missing = repo.get_by_code("ZZ").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that inserting a second country with the same code fails.
///
/// The code column carries a unique constraint, so the database rejects the
/// duplicate before any service-level check runs.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_code_at_database_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Country)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CountryRepository::new(db);
    repo.create(CountryParams {
        name: "Portugal".to_string(),
        code: "PT".to_string(),
    })
    .await?;

    let duplicate = repo
        .create(CountryParams {
            name: "Another Portugal".to_string(),
            code: "PT".to_string(),
        })
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
