//! Content-store adapters.

mod connections;
pub mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::{StoreConfig, StoreConnection};

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresDraftRepository, PostgresPublishedRepository, PostgresUserRepository,
};
