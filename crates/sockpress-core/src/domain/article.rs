use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identifiable;
use super::submission::Draft;
use crate::error::DomainError;

/// Editorial section an article is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    News,
    Drops,
    Stories,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::News, Category::Drops, Category::Stories];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Drops => "Drops",
            Category::Stories => "Stories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("Unknown category: {s}")))
    }
}

/// Author-controlled article fields, shared by admin edits and submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub category: Category,
    pub image: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub brand_ids: Vec<Uuid>,
}

impl Draft for ArticleDraft {
    fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("Article title is required".into()));
        }
        Ok(())
    }
}

/// Article entity - a published magazine piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub category: Category,
    pub image: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub brand_ids: Vec<Uuid>,
}

impl Article {
    /// Create a new article with a generated ID, published now.
    pub fn new(draft: ArticleDraft) -> Self {
        Self::publish_as(Uuid::new_v4(), draft)
    }

    /// Publish a draft under a caller-chosen id.
    pub fn publish_as(id: Uuid, draft: ArticleDraft) -> Self {
        Self {
            id,
            title: draft.title,
            excerpt: draft.excerpt,
            category: draft.category,
            image: draft.image,
            published_at: Utc::now(),
            featured: false,
            content: draft.content,
            brand_ids: draft.brand_ids,
        }
    }

    /// Overwrite the author-controlled fields, keeping identity and publish date.
    pub fn apply(&mut self, draft: ArticleDraft) {
        self.title = draft.title;
        self.excerpt = draft.excerpt;
        self.category = draft.category;
        self.image = draft.image;
        self.content = draft.content;
        self.brand_ids = draft.brand_ids;
    }
}

impl Identifiable for Article {
    fn id(&self) -> Uuid {
        self.id
    }
}
