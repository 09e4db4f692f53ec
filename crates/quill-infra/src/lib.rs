//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the Postgres content-store adapters, the in-memory
//! fallbacks used when no store is configured, and the auth services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - Postgres content store via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::memory::{InMemoryDraftRepository, InMemoryPublishedRepository, InMemoryUserRepository};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{PostgresDraftRepository, PostgresPublishedRepository, PostgresUserRepository};
