//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, the
//! persisted envelope, and the exporters.

pub mod clock;
pub mod export;
pub mod persistence;
pub mod ports;
pub mod storage;
