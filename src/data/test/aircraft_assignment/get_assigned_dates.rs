use super::*;

/// Tests collecting the assigned dates inside an inclusive range.
///
/// Expected: Ok with only the in-range dates, in chronological order
#[tokio::test]
async fn returns_in_range_dates_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    for day in [5, 1, 3, 9] {
        factory::aircraft_assignment::create_aircraft_assignment(db, aircraft.id, flight.id, date(day))
            .await?;
    }

    let dates = AircraftAssignmentRepository::new(db)
        .get_assigned_dates(aircraft.id, date(1), date(5))
        .await?;

    assert_eq!(dates, vec![date(1), date(3), date(5)]);

    Ok(())
}
