use serde::{Deserialize, Serialize};

/// Per-article, per-device engagement counters.
///
/// At most one of `user_liked` / `user_disliked` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementRecord {
    pub likes: u32,
    pub dislikes: u32,
    pub user_liked: bool,
    pub user_disliked: bool,
    pub views: u32,
    #[serde(default)]
    pub reading_time: Option<u32>,
}

impl EngagementRecord {
    pub fn toggle_like(&mut self) {
        if self.user_liked {
            self.user_liked = false;
            self.likes = self.likes.saturating_sub(1);
            return;
        }
        if self.user_disliked {
            self.user_disliked = false;
            self.dislikes = self.dislikes.saturating_sub(1);
        }
        self.user_liked = true;
        self.likes += 1;
    }

    pub fn toggle_dislike(&mut self) {
        if self.user_disliked {
            self.user_disliked = false;
            self.dislikes = self.dislikes.saturating_sub(1);
            return;
        }
        if self.user_liked {
            self.user_liked = false;
            self.likes = self.likes.saturating_sub(1);
        }
        self.user_disliked = true;
        self.dislikes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let mut record = EngagementRecord::default();
        record.toggle_like();
        record.toggle_dislike();
        record.toggle_like();

        assert!(record.user_liked);
        assert!(!record.user_disliked);
        assert_eq!(record.likes, 1);
        assert_eq!(record.dislikes, 0);
    }
}
