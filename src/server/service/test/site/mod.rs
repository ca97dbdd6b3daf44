use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::server::{
    error::{auth::AuthError, site::SiteError, AppError},
    model::site::UpdateSiteParam,
    service::site::SiteService,
};
use test_utils::{builder::TestBuilder, factory};

mod check_subdomain;
mod create_site;
mod subscription;
mod update_site;
