use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::device_state;
use crate::domain::{Bookmark, Category};
use crate::ports::DeviceStorage;

/// Saved articles on this device, one entry per article id.
pub struct BookmarkStore {
    storage: Arc<dyn DeviceStorage>,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub const STORAGE_KEY: &'static str = "sockpress.bookmarks";

    pub fn load(storage: Arc<dyn DeviceStorage>) -> Self {
        let bookmarks = device_state::load(storage.as_ref(), Self::STORAGE_KEY);
        Self { storage, bookmarks }
    }

    /// Add the article if absent, remove it if present.
    /// Returns whether the article is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, article_id: Uuid, title: &str, category: Category) -> bool {
        let bookmarked = if self.is_bookmarked(article_id) {
            self.bookmarks.retain(|b| b.article_id != article_id);
            false
        } else {
            self.bookmarks.push(Bookmark {
                article_id,
                title: title.to_string(),
                category,
                bookmarked_at: Utc::now(),
            });
            true
        };
        self.persist();
        bookmarked
    }

    pub fn is_bookmarked(&self, article_id: Uuid) -> bool {
        self.bookmarks.iter().any(|b| b.article_id == article_id)
    }

    /// Bookmarks, most recent first.
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        let mut bookmarks = self.bookmarks.clone();
        bookmarks.sort_by(|a, b| b.bookmarked_at.cmp(&a.bookmarked_at));
        bookmarks
    }

    /// Returns false when the article was not bookmarked.
    pub fn remove(&mut self, article_id: Uuid) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.article_id != article_id);
        let removed = self.bookmarks.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.bookmarks.clear();
        self.persist();
    }

    fn persist(&self) {
        device_state::persist(self.storage.as_ref(), Self::STORAGE_KEY, &self.bookmarks);
    }
}
