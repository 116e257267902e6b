use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use super::device_state;
use crate::domain::EngagementRecord;
use crate::ports::DeviceStorage;

const WORDS_PER_MINUTE: usize = 200;

/// Minutes needed to read `text`, never less than one.
pub fn estimate_reading_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Like/dislike/view counters for this device, keyed by article id.
pub struct EngagementStore {
    storage: Arc<dyn DeviceStorage>,
    records: HashMap<Uuid, EngagementRecord>,
}

impl EngagementStore {
    pub const STORAGE_KEY: &'static str = "sockpress.engagement";

    pub fn load(storage: Arc<dyn DeviceStorage>) -> Self {
        let records = device_state::load(storage.as_ref(), Self::STORAGE_KEY);
        Self { storage, records }
    }

    /// Current record for an article; unseen articles report zeros.
    pub fn engagement(&self, article_id: Uuid) -> EngagementRecord {
        self.records.get(&article_id).cloned().unwrap_or_default()
    }

    pub fn like_article(&mut self, article_id: Uuid) -> EngagementRecord {
        self.update(article_id, EngagementRecord::toggle_like)
    }

    pub fn dislike_article(&mut self, article_id: Uuid) -> EngagementRecord {
        self.update(article_id, EngagementRecord::toggle_dislike)
    }

    pub fn record_view(&mut self, article_id: Uuid) -> EngagementRecord {
        self.update(article_id, |record| record.views += 1)
    }

    pub fn set_reading_time(&mut self, article_id: Uuid, minutes: u32) -> EngagementRecord {
        self.update(article_id, |record| record.reading_time = Some(minutes))
    }

    fn update(
        &mut self,
        article_id: Uuid,
        mutate: impl FnOnce(&mut EngagementRecord),
    ) -> EngagementRecord {
        let record = self.records.entry(article_id).or_default();
        mutate(record);
        let snapshot = record.clone();
        device_state::persist(self.storage.as_ref(), Self::STORAGE_KEY, &self.records);
        snapshot
    }
}
