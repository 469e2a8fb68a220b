use sea_orm_migration::prelude::*;

mod m20200601_000001_create_items;
mod m20200601_000002_create_points;
mod m20200601_000003_create_point_items;
mod m20200601_000004_seed_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20200601_000001_create_items::Migration),
            Box::new(m20200601_000002_create_points::Migration),
            Box::new(m20200601_000003_create_point_items::Migration),
            Box::new(m20200601_000004_seed_items::Migration),
        ]
    }
}
