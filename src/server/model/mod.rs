//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. JSON columns
//! (navigation, membership config) are parsed into typed values here so the
//! rest of the server never touches raw `serde_json::Value` site data.

pub mod membership;
pub mod page;
pub mod site;
pub mod user;
