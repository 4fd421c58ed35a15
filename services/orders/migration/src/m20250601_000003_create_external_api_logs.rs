use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExternalApiLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExternalApiLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExternalApiLogs::OrderId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ExternalApiLogs::Status)
                            .string()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(ExternalApiLogs::Attempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ExternalApiLogs::LastAttempted)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(ExternalApiLogs::ErrorMessage).text())
                    .col(ColumnDef::new(ExternalApiLogs::ErrorCode).string())
                    .col(ColumnDef::new(ExternalApiLogs::ErrorStack).text())
                    .col(ColumnDef::new(ExternalApiLogs::ResponseData).json_binary())
                    .col(
                        ColumnDef::new(ExternalApiLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ExternalApiLogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExternalApiLogs::Table, ExternalApiLogs::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExternalApiLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ExternalApiLogs {
    Table,
    Id,
    OrderId,
    Status,
    Attempts,
    LastAttempted,
    ErrorMessage,
    ErrorCode,
    ErrorStack,
    ResponseData,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
}
