//! Client and services for the external identity indexer.
//!
//! Sites are mirrored on a decentralized identity network; the indexer
//! exposes that network over HTTP. `IndexerClient` is the raw endpoint
//! wrapper, `ProfileService` and `NoteService` add the read/sort semantics
//! the page routes rely on.

mod client;
pub mod note;
pub mod profile;

pub use client::IndexerClient;
pub use note::NoteService;
pub use profile::ProfileService;
