use sea_orm_migration::{prelude::*, schema::*};

use super::m20260805_000002_create_site_table::Site;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(pk_auto(Page::Id))
                    .col(integer(Page::SiteId))
                    .col(string(Page::Title))
                    .col(string(Page::Slug))
                    .col(string_null(Page::Excerpt))
                    .col(text(Page::Content))
                    .col(string(Page::Type))
                    .col(boolean(Page::Published))
                    .col(timestamp(Page::PublishedAt))
                    .col(
                        timestamp(Page::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Page::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Page::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_site_id")
                            .from(Page::Table, Page::SiteId)
                            .to(Site::Table, Site::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Slug lookups are per site. Not unique: soft-deleted pages must not
        // block slug reuse, live-row uniqueness is enforced by the service.
        manager
            .create_index(
                Index::create()
                    .name("idx_page_site_slug")
                    .table(Page::Table)
                    .col(Page::SiteId)
                    .col(Page::Slug)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Page::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Page {
    Table,
    Id,
    SiteId,
    Title,
    Slug,
    Excerpt,
    Content,
    Type,
    Published,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
