//! Whole-blob load and persist for device-local stores.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ports::DeviceStorage;

/// Read the blob under `key`, falling back to the default on any failure.
pub(crate) fn load<T>(storage: &dyn DeviceStorage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Device storage read failed, starting empty");
            return T::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "Discarding unreadable device state");
        T::default()
    })
}

/// Rewrite the blob under `key`. Failures are logged, never returned.
pub(crate) fn persist<T>(storage: &dyn DeviceStorage, key: &str, value: &T)
where
    T: Serialize + ?Sized,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "Device state could not be serialized");
            return;
        }
    };

    if let Err(e) = storage.set(key, &raw) {
        tracing::warn!(key, error = %e, "Failed to persist device state");
    }
}
