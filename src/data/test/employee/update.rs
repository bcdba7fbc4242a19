use super::*;

/// Tests moving an employee to a job in another department.
///
/// Expected: Ok with the new job and department resolved
#[tokio::test]
async fn moves_employee_to_another_job() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, employee) = factory::helpers::create_employee_with_dependencies(db).await?;
    let other_department = factory::department::create_department(db).await?;
    let other_job = factory::job::create_job(db, other_department.id).await?;

    let updated = EmployeeRepository::new(db)
        .update(
            employee.id,
            EmployeeParams {
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                phone_number: employee.phone_number.clone(),
                email: employee.email.clone(),
                salary: 8000,
                job_id: other_job.id,
                flight_hours: employee.flight_hours,
                manager_id: employee.manager_id,
            },
        )
        .await?;

    assert_eq!(updated.employee.id, employee.id);
    assert_eq!(updated.employee.salary, 8000);
    assert_eq!(updated.job.id, other_job.id);
    assert_eq!(updated.department.id, other_department.id);

    Ok(())
}

/// Tests updating an employee that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_when_employee_missing() {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EmployeeRepository::new(db)
        .update(
            999,
            EmployeeParams {
                first_name: "Ghost".to_string(),
                last_name: "Employee".to_string(),
                phone_number: "+15550000000".to_string(),
                email: "ghost@example.com".to_string(),
                salary: 1,
                job_id: 1,
                flight_hours: None,
                manager_id: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
