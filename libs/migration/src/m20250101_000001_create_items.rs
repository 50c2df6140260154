use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(pk_auto(Items::Id))
                    .col(text(Items::Name))
                    .col(text(Items::Category))
                    .col(double(Items::Price))
                    .col(text_null(Items::Description))
                    .to_owned(),
            )
            .await?;

        // name and category back the search and category filters, price the sort
        for (name, column) in [
            ("idx_items_name", Items::Name),
            ("idx_items_category", Items::Category),
            ("idx_items_price", Items::Price),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Items::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in ["idx_items_price", "idx_items_category", "idx_items_name"] {
            manager
                .drop_index(Index::drop().if_exists().name(name).table(Items::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Items {
    Table,
    Id,
    Name,
    Category,
    Price,
    Description,
}
