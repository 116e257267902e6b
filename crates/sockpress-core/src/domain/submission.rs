//! User-authored drafts awaiting an editorial decision.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Article, ArticleDraft, Brand, BrandDraft, Identifiable};
use crate::error::DomainError;

/// Editorial state of a submission.
///
/// `Approved` and `Declined` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Declined,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "declined" => Ok(SubmissionStatus::Declined),
            other => Err(DomainError::Validation(format!(
                "Unknown submission status: {other}"
            ))),
        }
    }
}

/// Moderation bookkeeping carried by every submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub status: SubmissionStatus,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    /// Id of the published entity. Reserved while an approval is in flight.
    #[serde(default)]
    pub published_entity_id: Option<Uuid>,
}

impl Default for Review {
    fn default() -> Self {
        Self {
            status: SubmissionStatus::Pending,
            moderation_comment: None,
            published_entity_id: None,
        }
    }
}

/// Payload validation for submission drafts.
pub trait Draft: Clone + Send + Sync {
    fn validate(&self) -> Result<(), DomainError>;
}

/// A submission type that can go through moderation and be published.
pub trait Reviewable: Identifiable + Clone + Send + Sync + 'static {
    type Draft: Draft;
    type Published: Identifiable + Send + Sync + 'static;

    /// Human-readable entity name used in errors and logs.
    const KIND: &'static str;

    fn create(author_id: Uuid, draft: Self::Draft) -> Self;
    fn author_id(&self) -> Uuid;
    fn review(&self) -> &Review;
    fn review_mut(&mut self) -> &mut Review;
    fn revise(&mut self, draft: Self::Draft);
    fn touch(&mut self);

    /// Map the submission schema onto the published entity schema.
    fn publish(&self, id: Uuid) -> Self::Published;
}

/// Article submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSubmission {
    pub id: Uuid,
    pub author_id: Uuid,
    #[serde(flatten)]
    pub draft: ArticleDraft,
    #[serde(flatten)]
    pub review: Review,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ArticleSubmission {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Reviewable for ArticleSubmission {
    type Draft = ArticleDraft;
    type Published = Article;

    const KIND: &'static str = "Submission";

    fn create(author_id: Uuid, draft: ArticleDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            draft,
            review: Review::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn author_id(&self) -> Uuid {
        self.author_id
    }

    fn review(&self) -> &Review {
        &self.review
    }

    fn review_mut(&mut self) -> &mut Review {
        &mut self.review
    }

    fn revise(&mut self, draft: ArticleDraft) {
        self.draft = draft;
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn publish(&self, id: Uuid) -> Article {
        Article::publish_as(id, self.draft.clone())
    }
}

/// Brand submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSubmission {
    pub id: Uuid,
    pub author_id: Uuid,
    #[serde(flatten)]
    pub draft: BrandDraft,
    #[serde(flatten)]
    pub review: Review,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for BrandSubmission {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Reviewable for BrandSubmission {
    type Draft = BrandDraft;
    type Published = Brand;

    const KIND: &'static str = "BrandSubmission";

    fn create(author_id: Uuid, draft: BrandDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            draft,
            review: Review::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn author_id(&self) -> Uuid {
        self.author_id
    }

    fn review(&self) -> &Review {
        &self.review
    }

    fn review_mut(&mut self) -> &mut Review {
        &mut self.review
    }

    fn revise(&mut self, draft: BrandDraft) {
        self.draft = draft;
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn publish(&self, id: Uuid) -> Brand {
        Brand::publish_as(id, self.draft.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Approved,
            SubmissionStatus::Declined,
        ] {
            assert_eq!(status.as_str().parse::<SubmissionStatus>().unwrap(), status);
        }
        assert!("archived".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn test_submission_json_is_flat() {
        let submission = ArticleSubmission::create(
            Uuid::new_v4(),
            ArticleDraft {
                title: "T".into(),
                excerpt: "E".into(),
                category: Category::News,
                image: "i.png".into(),
                content: None,
                brand_ids: vec![],
            },
        );

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["status"], "pending");
        assert!(value["moderation_comment"].is_null());
    }
}
