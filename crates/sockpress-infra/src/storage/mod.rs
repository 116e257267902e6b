//! Device storage implementations - JSON files on disk and in-memory fallback.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::InMemoryDeviceStorage;
