use crate::{
    model::page::{PageKind, PageVisibility},
    server::{
        data::page::PageRepository,
        error::AppError,
        model::page::{CreatePageParam, GetPagesParam, UpdatePageParam},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_site;
