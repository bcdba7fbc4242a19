use super::*;

/// Tests deleting an assignment by its composite key.
///
/// Expected: Ok, and the row can no longer be fetched
#[tokio::test]
async fn deletes_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    factory::aircraft_assignment::create_aircraft_assignment(db, aircraft.id, flight.id, date(1))
        .await?;

    let repo = AircraftAssignmentRepository::new(db);
    let key = (aircraft.id, flight.id, date(1));
    repo.delete(key).await?;

    assert!(repo.get_by_id(key).await?.is_none());

    Ok(())
}

/// Tests deleting an assignment that does not exist.
///
/// Expected: Ok
#[tokio::test]
async fn deleting_missing_assignment_is_ok() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AircraftAssignmentRepository::new(db)
        .delete((1, 1, date(1)))
        .await?;

    Ok(())
}
