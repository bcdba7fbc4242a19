use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub salary: i32,
    pub job_id: i32,
    pub flight_hours: Option<i32>,
    /// Self-referential manager link, kept as a plain foreign key to avoid
    /// ownership cycles in the object graph.
    pub manager_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job::Entity",
        from = "Column::JobId",
        to = "super::job::Column::Id"
    )]
    Job,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ManagerId",
        to = "Column::Id"
    )]
    Manager,
    #[sea_orm(has_many = "super::employee_assignment::Entity")]
    EmployeeAssignment,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::employee_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
