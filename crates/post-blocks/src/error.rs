//! Error types for post-blocks

pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures raised by the markup and attribute adapters.
///
/// Unparseable input is not an error at this layer; the parse functions
/// return `None` for it instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to serialize block markup: {0}")]
    MarkupSerialize(#[from] std::io::Error),

    #[error("Serialized block markup is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to serialize block attributes: {0}")]
    AttributeSerialize(#[from] serde_json::Error),
}
