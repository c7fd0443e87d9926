//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration and use the schema builder,
//! so the same files run on PostgreSQL and SQLite.

pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_expenses;
mod m20261019_000002_create_budgets;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_expenses::Migration),
            Box::new(m20261019_000002_create_budgets::Migration),
        ]
    }
}
