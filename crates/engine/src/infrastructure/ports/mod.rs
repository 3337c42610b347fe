//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Key/value storage (could swap a JSON file -> browser storage or a database)
//! - Clock (for testing)

mod error;
mod storage;
mod testing;

pub use error::{ExportError, PersistenceError};
pub use storage::{storage_keys, StorageProvider};
pub use testing::ClockPort;

#[cfg(test)]
pub use storage::MockStorageProvider;
#[cfg(test)]
pub use testing::MockClockPort;
