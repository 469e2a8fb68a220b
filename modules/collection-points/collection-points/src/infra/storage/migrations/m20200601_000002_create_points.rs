use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Points::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Points::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Points::Image).string().not_null())
                    .col(ColumnDef::new(Points::Name).string().not_null())
                    .col(ColumnDef::new(Points::Email).string().not_null())
                    .col(ColumnDef::new(Points::Whatsapp).string().not_null())
                    .col(ColumnDef::new(Points::Latitude).double().not_null())
                    .col(ColumnDef::new(Points::Longitude).double().not_null())
                    .col(ColumnDef::new(Points::City).string().not_null())
                    .col(ColumnDef::new(Points::Uf).string_len(2).not_null())
                    .col(ColumnDef::new(Points::Number).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Listing always filters on state and city together
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_points_uf_city")
                    .table(Points::Table)
                    .col(Points::Uf)
                    .col(Points::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Points::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Points {
    Table,
    Id,
    Image,
    Name,
    Email,
    Whatsapp,
    Latitude,
    Longitude,
    City,
    Uf,
    Number,
}
