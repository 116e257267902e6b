//! Domain entities - the core business objects.

mod article;
mod bookmark;
mod brand;
mod email;
mod engagement;
mod submission;

pub use article::{Article, ArticleDraft, Category};
pub use bookmark::Bookmark;
pub use brand::{Brand, BrandDraft};
pub use email::EmailAddress;
pub use engagement::EngagementRecord;
pub use submission::{
    ArticleSubmission, BrandSubmission, Draft, Review, Reviewable, SubmissionStatus,
};

use uuid::Uuid;

/// Anything stored in a table keyed by a UUID primary key.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}
