//! Device-local persistent storage port.

use crate::error::StorageError;

/// Key-value storage that survives restarts on a single device.
///
/// Values are whole JSON documents; callers read-modify-write them.
/// Calls are synchronous.
pub trait DeviceStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
