use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderNotifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderNotifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrderNotifications::OrderId).uuid().not_null())
                    .col(ColumnDef::new(OrderNotifications::Message).text().not_null())
                    .col(
                        ColumnDef::new(OrderNotifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(OrderNotifications::Table, OrderNotifications::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_notifications_order_id")
                    .table(OrderNotifications::Table)
                    .col(OrderNotifications::OrderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderNotifications::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OrderNotifications {
    Table,
    Id,
    OrderId,
    Message,
    CreatedAt,
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
}
