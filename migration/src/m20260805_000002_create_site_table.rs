use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Site::Table)
                    .if_not_exists()
                    .col(pk_auto(Site::Id))
                    .col(string_uniq(Site::Subdomain))
                    .col(string(Site::Name))
                    .col(string_null(Site::Description))
                    .col(string_null(Site::Icon))
                    .col(json(Site::Navigation))
                    .col(
                        timestamp(Site::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Site::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Site::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Site::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Site {
    Table,
    Id,
    Subdomain,
    Name,
    Description,
    Icon,
    Navigation,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
