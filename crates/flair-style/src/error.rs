//! Error types for the style system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while moving styles in and out of structured form.
///
/// Most of the style algebra is total. Errors only surface where a host
/// serializer is involved, and even then [`decode`](crate::codec::decode)
/// skips bad entries instead of reporting them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registered encoder failed to serialize a value.
    #[error("Failed to encode value for attribute kind '{kind}': {source}")]
    Encode {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A registered decoder rejected a serialized value.
    #[error("Failed to decode value for attribute kind '{kind}': {source}")]
    Decode {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value does not have the type its kind declares.
    ///
    /// This only happens when a name is re-registered with a different type.
    #[error("Value stored for attribute kind '{kind}' is not a {expected}")]
    TypeMismatch {
        kind: String,
        expected: &'static str,
    },

    /// Whole-document JSON failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an encode error.
    pub fn encode(kind: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            kind: kind.into(),
            source,
        }
    }

    /// Create a decode error.
    pub fn decode(kind: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            kind: kind.into(),
            source,
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(kind: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            kind: kind.into(),
            expected,
        }
    }
}
