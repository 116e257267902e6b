use std::collections::HashMap;
use std::sync::RwLock;

use sockpress_core::StorageError;
use sockpress_core::ports::DeviceStorage;

/// In-memory device storage.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryDeviceStorage {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryDeviceStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Unavailable("storage lock poisoned".to_string())
}

impl DeviceStorage for InMemoryDeviceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.remove(key);
        Ok(())
    }
}
