//! Quill Test Utils
//!
//! Shared testing utilities for building integration and unit tests for the
//! platform. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and customizable table schemas, plus
//! factories that insert entities with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use entity::prelude::User;
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
