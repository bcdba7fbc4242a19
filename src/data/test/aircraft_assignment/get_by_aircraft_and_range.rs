use super::*;

/// Tests the by-aircraft range query.
///
/// The range is inclusive on both ends and results come back in date order.
///
/// Expected: Ok with the boundary dates included and out-of-range excluded
#[tokio::test]
async fn range_is_inclusive_and_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    for day in [2, 4, 6, 8] {
        factory::aircraft_assignment::create_aircraft_assignment(db, aircraft.id, flight.id, date(day))
            .await?;
    }

    let assignments = AircraftAssignmentRepository::new(db)
        .get_by_aircraft_and_range(aircraft.id, date(2), date(6))
        .await?;

    let dates: Vec<_> = assignments.iter().map(|a| a.assignment.date).collect();
    assert_eq!(dates, vec![date(2), date(4), date(6)]);

    Ok(())
}

/// Tests that the query is scoped to the requested aircraft.
///
/// Expected: Ok with other aircraft's assignments excluded
#[tokio::test]
async fn scopes_to_requested_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::aircraft::create_aircraft(db).await?;
    let second = factory::aircraft::create_aircraft(db).await?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    factory::aircraft_assignment::create_aircraft_assignment(db, first.id, flight.id, date(1)).await?;
    factory::aircraft_assignment::create_aircraft_assignment(db, second.id, flight.id, date(2)).await?;

    let assignments = AircraftAssignmentRepository::new(db)
        .get_by_aircraft_and_range(first.id, date(1), date(28))
        .await?;

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].assignment.aircraft_id, first.id);

    Ok(())
}
