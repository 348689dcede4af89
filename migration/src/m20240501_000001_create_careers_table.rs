use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Careers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Careers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Careers::Username).string_len(30).not_null())
                    .col(
                        ColumnDef::new(Careers::CreatedDatetime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Careers::Title).string_len(50).not_null())
                    .col(ColumnDef::new(Careers::Content).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Careers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Careers {
    Table,
    Id,
    Username,
    CreatedDatetime,
    Title,
    Content,
}
