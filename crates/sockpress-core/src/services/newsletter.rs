use std::collections::BTreeSet;
use std::sync::Arc;

use super::device_state;
use crate::domain::EmailAddress;
use crate::error::DomainError;
use crate::ports::DeviceStorage;

/// Newsletter subscriber list kept in device storage.
pub struct NewsletterStore {
    storage: Arc<dyn DeviceStorage>,
    subscribers: BTreeSet<EmailAddress>,
}

impl NewsletterStore {
    pub const STORAGE_KEY: &'static str = "sockpress.newsletter";

    pub fn load(storage: Arc<dyn DeviceStorage>) -> Self {
        let subscribers = device_state::load(storage.as_ref(), Self::STORAGE_KEY);
        Self {
            storage,
            subscribers,
        }
    }

    /// Add a subscriber. Returns the normalized address that was stored.
    pub fn subscribe(&mut self, raw: &str) -> Result<EmailAddress, DomainError> {
        let email = EmailAddress::parse(raw)?;
        if self.subscribers.contains(&email) {
            return Err(DomainError::Duplicate(
                "This email is already subscribed".into(),
            ));
        }

        self.subscribers.insert(email.clone());
        self.persist();
        tracing::info!(email = %email.masked(), "Newsletter subscription added");
        Ok(email)
    }

    pub fn unsubscribe(&mut self, raw: &str) -> Result<EmailAddress, DomainError> {
        let email = EmailAddress::parse(raw)?;
        if !self.subscribers.remove(&email) {
            return Err(DomainError::Validation(
                "This email is not subscribed".into(),
            ));
        }

        self.persist();
        tracing::info!(email = %email.masked(), "Newsletter subscription removed");
        Ok(email)
    }

    /// Malformed addresses are never subscribed.
    pub fn is_subscribed(&self, raw: &str) -> bool {
        EmailAddress::parse(raw)
            .map(|email| self.subscribers.contains(&email))
            .unwrap_or(false)
    }

    pub fn subscribers(&self) -> Vec<EmailAddress> {
        self.subscribers.iter().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.subscribers.len()
    }

    fn persist(&self) {
        device_state::persist(self.storage.as_ref(), Self::STORAGE_KEY, &self.subscribers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::TestStorage;

    fn store() -> NewsletterStore {
        NewsletterStore::load(Arc::new(TestStorage::default()))
    }

    #[test]
    fn test_subscribe_normalizes_and_rejects_duplicates() {
        let mut store = store();

        let email = store.subscribe("USER@Example.com ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
        assert_eq!(store.count(), 1);

        let err = store.subscribe("user@example.com").unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
        assert!(err.to_string().contains("already subscribed"));
        assert_eq!(store.count(), 1);

        assert!(store.subscribe("User@EXAMPLE.com").is_err());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_subscribe_rejects_invalid_email() {
        let mut store = store();
        let err = store.subscribe("not-an-email").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = store();
        store.subscribe("reader@socks.io").unwrap();

        store.unsubscribe(" Reader@Socks.io").unwrap();
        assert!(!store.is_subscribed("reader@socks.io"));
        assert!(store.unsubscribe("reader@socks.io").is_err());
    }

    #[test]
    fn test_subscribers_survive_reload() {
        let storage = Arc::new(TestStorage::default());
        let mut store = NewsletterStore::load(storage.clone());
        store.subscribe("b@socks.io").unwrap();
        store.subscribe("a@socks.io").unwrap();

        let reloaded = NewsletterStore::load(storage);
        let emails: Vec<String> = reloaded
            .subscribers()
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(emails, vec!["a@socks.io", "b@socks.io"]);
    }
}
