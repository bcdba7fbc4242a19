use super::*;

/// Tests filtering out employees assigned on a date.
///
/// An employee with an assignment on the queried date must not appear, while
/// unassigned employees must.
///
/// Expected: Ok with only the unassigned employee
#[tokio::test]
async fn excludes_employees_assigned_on_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job, busy) = factory::helpers::create_employee_with_dependencies(db).await?;
    let free = factory::employee::create_employee(db, job.id).await?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    factory::employee_assignment::create_employee_assignment(db, busy.id, flight.id, date).await?;

    let available = EmployeeRepository::new(db).get_available_on(date).await?;

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].employee.id, free.id);

    Ok(())
}

/// Tests that assignments on other dates do not affect availability.
///
/// Expected: Ok with both employees available
#[tokio::test]
async fn ignores_assignments_on_other_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job, assigned) = factory::helpers::create_employee_with_dependencies(db).await?;
    factory::employee::create_employee(db, job.id).await?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let assigned_date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    factory::employee_assignment::create_employee_assignment(db, assigned.id, flight.id, assigned_date)
        .await?;

    let other_date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let available = EmployeeRepository::new(db).get_available_on(other_date).await?;

    assert_eq!(available.len(), 2);

    Ok(())
}
