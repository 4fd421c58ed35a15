pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_orders;
mod m20250601_000002_create_order_notifications;
mod m20250601_000003_create_external_api_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_orders::Migration),
            Box::new(m20250601_000002_create_order_notifications::Migration),
            Box::new(m20250601_000003_create_external_api_logs::Migration),
        ]
    }
}
