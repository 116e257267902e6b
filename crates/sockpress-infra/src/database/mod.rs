//! Table store implementations.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::{
    InMemoryArticleRepository, InMemoryBrandRepository, InMemoryBrandSubmissionRepository,
    InMemoryRepository, InMemorySubmissionRepository,
};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresArticleRepository, PostgresBrandRepository, PostgresBrandSubmissionRepository,
    PostgresSubmissionRepository,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
