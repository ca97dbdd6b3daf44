use crate::server::{
    data::membership::MembershipRepository,
    error::AppError,
    model::membership::{CreateMembershipParam, MembershipRole, Subscription},
};
use test_utils::{builder::TestBuilder, factory};

mod create_delete;
mod find;
mod update_config;
