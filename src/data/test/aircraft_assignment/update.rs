use super::*;

/// Tests re-keying an assignment.
///
/// The composite key is the identity, so the update removes the old row and
/// inserts one under the new key without changing the total count.
///
/// Expected: Ok with old key gone, new key present, one row total
#[tokio::test]
async fn rekeys_assignment() -> Result<(), DbErr> {
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
    let old_key = (aircraft.id, flight.id, date(1));
    let updated = repo
        .update(
            old_key,
            AircraftAssignmentParams {
                aircraft_id: aircraft.id,
                flight_id: flight.id,
                date: date(2),
            },
        )
        .await?;

    assert_eq!(updated.assignment.date, date(2));
    assert!(repo.get_by_id(old_key).await?.is_none());
    assert!(repo
        .get_by_id((aircraft.id, flight.id, date(2)))
        .await?
        .is_some());
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
