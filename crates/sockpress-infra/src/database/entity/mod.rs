//! SeaORM entities, one per table.
//!
//! List-valued fields are stored as JSONB arrays; enums as their text form.

pub mod article;
pub mod brand;
pub mod brand_submission;
pub mod submission;

use std::fmt::Display;

use sea_orm::entity::prelude::Json;
use serde::de::DeserializeOwned;

use sockpress_core::RepoError;

pub(crate) fn decode_error(column: &str, e: impl Display) -> RepoError {
    RepoError::Decode(format!("{column}: {e}"))
}

pub(crate) fn decode_list<T: DeserializeOwned>(column: &str, value: Json) -> Result<Vec<T>, RepoError> {
    serde_json::from_value(value).map_err(|e| decode_error(column, e))
}

pub(crate) fn encode_list<T: Display>(items: &[T]) -> Json {
    Json::Array(items.iter().map(|item| Json::String(item.to_string())).collect())
}
