use super::*;

/// Tests looking up an employee by email.
///
/// Expected: Ok with Some(employee), and None for an unknown email
#[tokio::test]
async fn gets_employee_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_personnel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, employee) = factory::helpers::create_employee_with_dependencies(db).await?;

    let repo = EmployeeRepository::new(db);
    let found = repo.get_by_email(&employee.email).await?;

    assert_eq!(found.map(|e| e.id), Some(employee.id));
    assert!(repo.get_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
