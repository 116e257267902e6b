use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identifiable;
use super::submission::Draft;
use crate::error::DomainError;

/// Brand fields an author or admin can supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDraft {
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub description: String,
    pub website: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub price_tiers: Vec<String>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub headquarters: String,
}

impl Draft for BrandDraft {
    fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("Brand name is required".into()));
        }
        Ok(())
    }
}

/// Brand entity - an entry in the brand directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub cover_image: Option<String>,
    pub description: String,
    pub website: String,
    pub tags: Vec<String>,
    pub countries: Vec<String>,
    pub price_tiers: Vec<String>,
    pub founded: Option<i32>,
    pub headquarters: String,
    pub rating: f64,
}

impl Brand {
    /// Create a new unrated brand with a generated ID.
    pub fn new(draft: BrandDraft) -> Self {
        Self::publish_as(Uuid::new_v4(), draft)
    }

    pub fn publish_as(id: Uuid, draft: BrandDraft) -> Self {
        Self {
            id,
            name: draft.name,
            logo: draft.logo,
            cover_image: draft.cover_image,
            description: draft.description,
            website: draft.website,
            tags: draft.tags,
            countries: draft.countries,
            price_tiers: draft.price_tiers,
            founded: draft.founded,
            headquarters: draft.headquarters,
            rating: 0.0,
        }
    }

    pub fn apply(&mut self, draft: BrandDraft) {
        let rating = self.rating;
        *self = Self::publish_as(self.id, draft);
        self.rating = rating;
    }

    /// Whether the brand is tagged with `category`, ignoring case.
    pub fn has_tag(&self, category: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.trim().eq_ignore_ascii_case(category.trim()))
    }
}

impl Identifiable for Brand {
    fn id(&self) -> Uuid {
        self.id
    }
}
