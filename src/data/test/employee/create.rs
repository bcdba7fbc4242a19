use super::*;

/// Tests creating a new employee.
///
/// Verifies that the repository persists the employee and resolves their job
/// and the job's department in the returned bundle.
///
/// Expected: Ok with employee, job, and department resolved
#[tokio::test]
async fn creates_employee_with_resolved_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::department::create_department(db).await?;
    let job = factory::job::create_job(db, department.id).await?;

    let repo = EmployeeRepository::new(db);
    let relations = repo
        .create(EmployeeParams {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "+15550000001".to_string(),
            email: "ada@example.com".to_string(),
            salary: 7000,
            job_id: job.id,
            flight_hours: Some(1200),
            manager_id: None,
        })
        .await?;

    assert!(relations.employee.id > 0);
    assert_eq!(relations.employee.email, "ada@example.com");
    assert_eq!(relations.employee.flight_hours, Some(1200));
    assert_eq!(relations.job.id, job.id);
    assert_eq!(relations.department.id, department.id);

    Ok(())
}

/// Tests creating an employee reporting to a manager.
///
/// Expected: Ok with the manager id persisted
#[tokio::test]
async fn creates_employee_with_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job, manager) = factory::helpers::create_employee_with_dependencies(db).await?;

    let relations = EmployeeRepository::new(db)
        .create(EmployeeParams {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            phone_number: "+15550000002".to_string(),
            email: "grace@example.com".to_string(),
            salary: 6500,
            job_id: job.id,
            flight_hours: None,
            manager_id: Some(manager.id),
        })
        .await?;

    assert_eq!(relations.employee.manager_id, Some(manager.id));

    Ok(())
}
