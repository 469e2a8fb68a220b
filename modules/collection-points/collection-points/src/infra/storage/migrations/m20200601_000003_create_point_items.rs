use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PointItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PointItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PointItems::PointId).integer().not_null())
                    .col(ColumnDef::new(PointItems::ItemId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_items_point_id")
                            .from(PointItems::Table, PointItems::PointId)
                            .to(Points::Table, Points::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_items_item_id")
                            .from(PointItems::Table, PointItems::ItemId)
                            .to(Items::Table, Items::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_point_items_point_id")
                    .table(PointItems::Table)
                    .col(PointItems::PointId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PointItems {
    Table,
    Id,
    PointId,
    ItemId,
}

#[derive(DeriveIden)]
enum Points {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
}
