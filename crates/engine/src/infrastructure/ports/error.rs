//! Error types for port operations.

/// Failures while decoding or encoding the persisted character envelope.
///
/// The store absorbs these: it logs them and falls back to a blank record.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored blob was written by a newer schema than this build understands.
    #[error("Unsupported schema version {found} (current is {current})")]
    UnsupportedVersion { found: u64, current: u64 },

    /// Stored blob is valid JSON but not a `{state, version}` envelope.
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),
}

impl PersistenceError {
    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a MalformedEnvelope error.
    pub fn malformed(message: impl ToString) -> Self {
        Self::MalformedEnvelope(message.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err)
    }
}

/// Failures while writing export files.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Export serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
