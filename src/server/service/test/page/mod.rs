use crate::{
    model::page::PageKind,
    server::{error::AppError, model::page::UpdatePageParam, service::page::PageService},
};
use test_utils::{builder::TestBuilder, factory};

mod create_page;
mod update_page;
