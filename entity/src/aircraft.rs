use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub registration: String,
    #[sea_orm(column_name = "type")]
    pub aircraft_type: String,
    pub range: i32,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aircraft_assignment::Entity")]
    AircraftAssignment,
}

impl Related<super::aircraft_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
