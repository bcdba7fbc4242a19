use super::*;

/// Tests looking up a flight by its number.
///
/// Expected: Ok with Some(flight), and None for an unknown number
#[tokio::test]
async fn gets_flight_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let repo = FlightRepository::new(db);
    let found = repo.get_by_number(&flight.number).await?;

    assert_eq!(found.map(|f| f.id), Some(flight.id));
    assert!(repo.get_by_number("SB9999").await?.is_none());

    Ok(())
}
