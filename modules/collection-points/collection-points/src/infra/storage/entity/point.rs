use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub number: i32,
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
