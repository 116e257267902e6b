use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// A saved article on one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub article_id: Uuid,
    pub title: String,
    pub category: Category,
    pub bookmarked_at: DateTime<Utc>,
}
