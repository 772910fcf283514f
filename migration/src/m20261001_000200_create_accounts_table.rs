use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(string_len(Accounts::Kind, 20).not_null())
                    .col(string_len(Accounts::UserName, 100).not_null())
                    .col(string_len(Accounts::Email, 255).not_null().unique_key())
                    .col(string_len(Accounts::PasswordHash, 255).not_null())
                    .col(string_len_null(Accounts::PhoneNumber, 20))
                    .col(string_len_null(Accounts::Address, 255))
                    .col(date_null(Accounts::Dob))
                    // minor currency units
                    .col(big_integer(Accounts::Balance).default(0))
                    .col(integer(Accounts::SupervisorId).not_null())
                    .col(boolean(Accounts::IsActive).default(true))
                    .col(timestamp(Accounts::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Accounts::UpdatedAt).default(Expr::current_timestamp()))
                    .check(Expr::col(Accounts::Balance).gte(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_supervisor_id")
                            .from(Accounts::Table, Accounts::SupervisorId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_supervisor_id")
                    .table(Accounts::Table)
                    .col(Accounts::SupervisorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Kind,
    UserName,
    Email,
    PasswordHash,
    PhoneNumber,
    Address,
    Dob,
    Balance,
    SupervisorId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
