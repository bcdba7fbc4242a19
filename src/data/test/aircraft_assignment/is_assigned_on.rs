use super::*;

/// Tests the point availability check.
///
/// Expected: true on the assigned date, false elsewhere
#[tokio::test]
async fn reports_assignment_on_exact_date_only() -> Result<(), DbErr> {
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

    assert!(repo.is_assigned_on(aircraft.id, date(1)).await?);
    assert!(!repo.is_assigned_on(aircraft.id, date(2)).await?);

    Ok(())
}

/// Tests that the check is scoped to the aircraft.
///
/// Expected: false for another aircraft on the same date
#[tokio::test]
async fn ignores_other_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let assigned = factory::aircraft::create_aircraft(db).await?;
    let other = factory::aircraft::create_aircraft(db).await?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    factory::aircraft_assignment::create_aircraft_assignment(db, assigned.id, flight.id, date(1))
        .await?;

    assert!(!AircraftAssignmentRepository::new(db)
        .is_assigned_on(other.id, date(1))
        .await?);

    Ok(())
}

/// Tests the self-excluding availability check used during updates.
///
/// The row named by the exclusion key must not count as a conflict, but any
/// other row on the same date must.
///
/// Expected: false when only the excluded row matches, true otherwise
#[tokio::test]
async fn excludes_own_row_from_conflict_check() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let (_, _, _, _, flight_a) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_, _, _, _, flight_b) = factory::helpers::create_flight_with_dependencies(db).await?;
    factory::aircraft_assignment::create_aircraft_assignment(db, aircraft.id, flight_a.id, date(1))
        .await?;

    let repo = AircraftAssignmentRepository::new(db);

    // Only the excluded row sits on the date.
    let own_key = (aircraft.id, flight_a.id, date(1));
    assert!(!repo
        .is_assigned_on_excluding(aircraft.id, date(1), own_key)
        .await?);

    // A different row on the same date still conflicts.
    factory::aircraft_assignment::create_aircraft_assignment(db, aircraft.id, flight_b.id, date(1))
        .await?;
    assert!(repo
        .is_assigned_on_excluding(aircraft.id, date(1), own_key)
        .await?);

    Ok(())
}
