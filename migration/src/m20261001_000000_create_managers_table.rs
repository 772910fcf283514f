use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Managers::Table)
                    .if_not_exists()
                    .col(pk_auto(Managers::Id))
                    .col(string_len(Managers::UserName, 100).not_null())
                    .col(string_len(Managers::Email, 255).not_null().unique_key())
                    .col(string_len(Managers::PasswordHash, 255).not_null())
                    .col(timestamp(Managers::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Managers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Managers {
    Table,
    Id,
    UserName,
    Email,
    PasswordHash,
    CreatedAt,
}
