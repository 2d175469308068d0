use sea_orm_migration::{prelude::*, schema::*};

static IDX_SNIPPETS_CREATED_AT: &str = "idx_snippets_created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Snippets::Table)
                    .if_not_exists()
                    .col(pk_auto(Snippets::Id))
                    .col(string_len(Snippets::Title, 100))
                    .col(text(Snippets::Content))
                    .col(timestamp(Snippets::CreatedAt))
                    .col(timestamp(Snippets::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SNIPPETS_CREATED_AT)
                    .table(Snippets::Table)
                    .col(Snippets::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SNIPPETS_CREATED_AT)
                    .table(Snippets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Snippets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Snippets {
    Table,
    Id,
    Title,
    Content,
    CreatedAt,
    ExpiresAt,
}
