use crate::dto::employee::EmployeeDto;
use crate::error::AppError;
use crate::service::employee::EmployeeService;
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

fn dto(email: &str, job_id: i32) -> EmployeeDto {
    EmployeeDto {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        phone_number: "+15550000001".to_string(),
        email: email.to_string(),
        salary: Some(7000),
        job_id: Some(job_id),
        flight_hours: None,
        manager_id: None,
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

/// Tests that creating an employee with an already-used email fails.
///
/// Expected: BadRequest naming the conflicting email
#[tokio::test]
async fn create_rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job, existing) = factory::helpers::create_employee_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;

    let result = EmployeeService::new(db).create(dto(&existing.email, job.id)).await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(
                msg,
                format!("Employee with email {} already exists", existing.email)
            );
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }

    Ok(())
}

/// Tests that a broken job reference is a domain error.
///
/// Expected: BadRequest naming the missing job
#[tokio::test]
async fn create_rejects_missing_job() {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EmployeeService::new(db)
        .create(dto("ada@example.com", 99))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Job with ID 99 does not exist"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

/// Tests that a broken manager reference is a domain error.
///
/// Expected: BadRequest naming the missing employee
#[tokio::test]
async fn create_rejects_missing_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::department::create_department(db)
        .await
        .map_err(AppError::DbErr)?;
    let job = factory::job::create_job(db, department.id)
        .await
        .map_err(AppError::DbErr)?;

    let mut payload = dto("ada@example.com", job.id);
    payload.manager_id = Some(99);

    let result = EmployeeService::new(db).create(payload).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Employee with ID 99 does not exist"),
        other => panic!("expected BadRequest, got {other:?}"),
    }

    Ok(())
}

/// Tests that an employee may keep their own email on update.
///
/// Expected: Ok
#[tokio::test]
async fn update_allows_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job, employee) = factory::helpers::create_employee_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;

    let updated = EmployeeService::new(db)
        .update(employee.id, dto(&employee.email, job.id))
        .await?;

    assert_eq!(updated.email, employee.email);
    assert_eq!(updated.first_name, "Ada");

    Ok(())
}

/// Tests listing employees free on a date.
///
/// Expected: Ok without the employee assigned on that date
#[tokio::test]
async fn available_by_date_excludes_assigned_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job, busy) = factory::helpers::create_employee_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;
    let free = factory::employee::create_employee(db, job.id)
        .await
        .map_err(AppError::DbErr)?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;
    factory::employee_assignment::create_employee_assignment(db, busy.id, flight.id, date(1))
        .await
        .map_err(AppError::DbErr)?;

    let available = EmployeeService::new(db).get_available_by_date(date(1)).await?;

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, free.id);

    Ok(())
}

/// Tests the per-employee availability calendar.
///
/// An assignment in the middle of the window splits it: the free days on
/// either side come back in chronological order.
///
/// Expected: Ok with the assigned day missing
#[tokio::test]
async fn availabilities_skip_assigned_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, employee) = factory::helpers::create_employee_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;
    let (_, _, _, _, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;
    factory::employee_assignment::create_employee_assignment(db, employee.id, flight.id, date(2))
        .await
        .map_err(AppError::DbErr)?;

    let availabilities = EmployeeService::new(db)
        .get_availabilities(employee.id, date(1), date(3))
        .await?;

    assert_eq!(availabilities, vec![date(1), date(3)]);

    Ok(())
}

/// Tests the availability calendar for a fully free window.
///
/// Expected: Ok with every day of the window
#[tokio::test]
async fn availabilities_cover_free_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_assignment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, employee) = factory::helpers::create_employee_with_dependencies(db)
        .await
        .map_err(AppError::DbErr)?;

    let availabilities = EmployeeService::new(db)
        .get_availabilities(employee.id, date(10), date(12))
        .await?;

    assert_eq!(availabilities, vec![date(10), date(11), date(12)]);

    Ok(())
}
