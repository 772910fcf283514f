pub use sea_orm_migration::prelude::*;

mod m20261001_000000_create_managers_table;
mod m20261001_000100_create_employees_table;
mod m20261001_000200_create_accounts_table;
mod m20261001_000300_create_transactions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000000_create_managers_table::Migration),
            Box::new(m20261001_000100_create_employees_table::Migration),
            Box::new(m20261001_000200_create_accounts_table::Migration),
            Box::new(m20261001_000300_create_transactions_table::Migration),
        ]
    }
}
