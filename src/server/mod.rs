//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the platform: API endpoints,
//! business logic, data access, and infrastructure services. The backend uses
//! Axum as the web framework, SeaORM for database operations, and reqwest for
//! calls to the external identity indexer.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session-based authentication guard
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, indexer client)
//! - **Startup** (`startup`) - Initialization of database, sessions, and HTTP client
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the matching controller
//! 2. **Controller** resolves the viewer through the auth guard, converts DTOs
//!    to params, calls services
//! 3. **Service** executes business logic against repositories and the indexer
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts domain models back to DTOs for the response
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
