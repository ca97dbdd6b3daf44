use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260805_000001_create_user_table::User, m20260805_000002_create_site_table::Site,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Membership::Table)
                    .if_not_exists()
                    .col(pk_auto(Membership::Id))
                    .col(integer(Membership::UserId))
                    .col(integer(Membership::SiteId))
                    .col(string(Membership::Role))
                    .col(json_null(Membership::Config))
                    .col(
                        timestamp(Membership::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_user_id")
                            .from(Membership::Table, Membership::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_site_id")
                            .from(Membership::Table, Membership::SiteId)
                            .to(Site::Table, Site::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership per role per (user, site); a subscription is unique
        // per user and site.
        manager
            .create_index(
                Index::create()
                    .name("idx_membership_user_site_role")
                    .table(Membership::Table)
                    .col(Membership::UserId)
                    .col(Membership::SiteId)
                    .col(Membership::Role)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Membership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Membership {
    Table,
    Id,
    UserId,
    SiteId,
    Role,
    Config,
    CreatedAt,
}
