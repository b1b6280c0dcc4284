use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per persisted document, keyed by a fixed name
        manager
            .create_table(
                Table::create()
                    .table(AppState::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AppState::Key).string().not_null().primary_key())
                    .col(ColumnDef::new(AppState::Value).text().not_null())
                    .col(
                        ColumnDef::new(AppState::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppState::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AppState {
    Table,
    Key,
    Value,
    UpdatedAt,
}
