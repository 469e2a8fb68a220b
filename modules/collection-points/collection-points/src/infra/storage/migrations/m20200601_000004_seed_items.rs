use sea_orm_migration::prelude::*;

use crate::domain::catalog::ITEM_CATALOG;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Items::Table)
            .columns([Items::Id, Items::Title, Items::Image]);

        for entry in &ITEM_CATALOG {
            insert
                .values([entry.id.into(), entry.title.into(), entry.image.into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids = ITEM_CATALOG.iter().map(|entry| entry.id);
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Items::Table)
                    .and_where(Expr::col(Items::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Title,
    Image,
}
