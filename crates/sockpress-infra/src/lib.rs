//! # Sockpress Infrastructure
//!
//! Concrete implementations of the ports defined in `sockpress-core`:
//! the PostgreSQL table store, in-memory repositories, device storage and
//! JWT verification.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL table store via SeaORM
//! - `minimal` - No external services, in-memory repositories only

pub mod auth;
pub mod database;
pub mod storage;

pub use auth::{JwtConfig, JwtTokenService};
pub use database::{
    InMemoryArticleRepository, InMemoryBrandRepository, InMemoryBrandSubmissionRepository,
    InMemoryRepository, InMemorySubmissionRepository,
};
pub use storage::{InMemoryDeviceStorage, JsonFileStorage};
