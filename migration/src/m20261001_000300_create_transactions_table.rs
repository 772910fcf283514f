use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(string_len(Transactions::Kind, 20).not_null())
                    .col(integer(Transactions::AccountId).not_null())
                    .col(big_integer(Transactions::Amount).not_null())
                    .col(string_len(Transactions::Status, 20).default("waiting"))
                    .col(string_len(Transactions::ReferenceId, 100))
                    .col(timestamp(Transactions::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_null(Transactions::ResolvedAt))
                    .col(integer_null(Transactions::ResolvedBy))
                    .check(Expr::col(Transactions::Amount).gt(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_account_id")
                            .from(Transactions::Table, Transactions::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_account_status")
                    .table(Transactions::Table)
                    .col(Transactions::AccountId)
                    .col(Transactions::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    Kind,
    AccountId,
    Amount,
    Status,
    ReferenceId,
    CreatedAt,
    ResolvedAt,
    ResolvedBy,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}
