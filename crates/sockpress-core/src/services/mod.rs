//! Domain services - moderation workflow, device-local state stores and
//! catalog queries.

mod bookmarks;
pub mod catalog;
mod device_state;
mod engagement;
mod moderation;
mod newsletter;

pub use bookmarks::BookmarkStore;
pub use catalog::SearchResults;
pub use engagement::{EngagementStore, estimate_reading_time};
pub use moderation::{
    Approval, ArticleModeration, BrandModeration, ModerationService,
};
pub use newsletter::NewsletterStore;
