//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle timestamps and unique identifiers so tests
//! stay concise.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user(&db).await?;
//! let site = factory::site::create_site(&db).await?;
//!
//! // Or customize through the builder
//! let site = factory::site::SiteFactory::new(&db)
//!     .subdomain("my-site")
//!     .deleted()
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod membership;
pub mod page;
pub mod site;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use membership::create_membership;
pub use page::create_page;
pub use site::create_site;
pub use user::create_user;
