//! Cosmere character creator engine.
//!
//! ## Structure
//!
//! - `entities/` - The character store wrapping the domain record
//! - `infrastructure/` - Ports, storage and clock adapters, persistence, exports
//! - `config` - Environment configuration for the export binary

pub mod config;
pub mod entities;
pub mod infrastructure;

pub use config::EngineConfig;
pub use entities::CharacterStore;
pub use infrastructure::ports::{ExportError, PersistenceError};
