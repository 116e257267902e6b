//! # Sockpress Core
//!
//! The domain layer of the Sockpress magazine backend.
//! Entities, the ports infrastructure must implement, and the services that
//! drive submission moderation and per-device engagement state.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError, StorageError};
