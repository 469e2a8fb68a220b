use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::point_item::Entity")]
    PointItems,
}

impl Related<super::point_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
