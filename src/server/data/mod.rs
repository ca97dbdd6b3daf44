//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in
//! the application. Repositories use SeaORM entity models internally and
//! return domain models, keeping the entity layer an implementation detail
//! of this module.

pub mod membership;
pub mod page;
pub mod site;
pub mod user;

#[cfg(test)]
mod test;
