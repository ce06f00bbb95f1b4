//! Error types for post-media

use std::path::PathBuf;

/// Result type for post-media operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in post-media operations.
///
/// A block that does not match the media reference is never an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Block adapter error: {0}")]
    Blocks(#[from] post_blocks::Error),

    #[error("Invalid media reference: {field} {message}")]
    InvalidMediaReference {
        field: &'static str,
        message: String,
    },

    #[error("Unknown block kind: {0}")]
    UnknownBlockKind(String),

    #[error("Failed to parse config from {origin}: {message}")]
    ConfigParse { origin: String, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn invalid_media(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidMediaReference {
            field,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
