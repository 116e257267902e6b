//! # Sockpress Shared
//!
//! Wire types shared between the API server and its clients. Kept free of
//! domain dependencies so a frontend can compile it as-is.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
