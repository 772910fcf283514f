use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string_len(Employees::UserName, 100).not_null())
                    .col(string_len(Employees::Email, 255).not_null().unique_key())
                    .col(string_len(Employees::PasswordHash, 255).not_null())
                    .col(string_len_null(Employees::PhoneNumber, 20))
                    .col(string_len_null(Employees::Address, 255))
                    .col(date_null(Employees::Dob))
                    .col(integer(Employees::UserCount).default(0))
                    .col(integer(Employees::SupervisorId).not_null())
                    .col(timestamp(Employees::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_supervisor_id")
                            .from(Employees::Table, Employees::SupervisorId)
                            .to(Managers::Table, Managers::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    UserName,
    Email,
    PasswordHash,
    PhoneNumber,
    Address,
    Dob,
    UserCount,
    SupervisorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Managers {
    Table,
    Id,
}
