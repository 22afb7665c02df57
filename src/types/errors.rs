use std::fmt;

// === StorageError ===

/// Errors reported by key/value storage backends.
#[derive(Debug)]
pub enum StorageError {
    /// The value for a key could not be read.
    ReadFailed(String),
    /// A value could not be written.
    WriteFailed(String),
    /// The backend is disabled or inaccessible.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
