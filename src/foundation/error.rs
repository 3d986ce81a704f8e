/// Convenience result type used across layerstack.
pub type LayerstackResult<T> = Result<T, LayerstackError>;

/// Top-level error taxonomy used by catalog, render and batch APIs.
///
/// The composition engine itself (matching, z-order, overrides, layer building) is total and
/// never produces these; they originate from lookups, loading and encoding.
#[derive(thiserror::Error, Debug)]
pub enum LayerstackError {
    /// A referenced product, project or asset has no catalog entry.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed variant input or record metadata, rejected before the engine runs.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// Decoding, text shaping, rasterization or encoding failed.
    #[error("render failure: {0}")]
    Render(String),

    /// Errors when serializing or deserializing records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Coarse classification of a [`LayerstackError`], used in batch reports.
pub enum ErrorKind {
    /// See [`LayerstackError::NotFound`].
    NotFound,
    /// See [`LayerstackError::InvalidMetadata`].
    InvalidMetadata,
    /// See [`LayerstackError::Render`].
    Render,
    /// See [`LayerstackError::Serde`].
    Serde,
    /// See [`LayerstackError::Other`].
    Other,
}

impl LayerstackError {
    /// Build a [`LayerstackError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`LayerstackError::InvalidMetadata`] value.
    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadata(msg.into())
    }

    /// Build a [`LayerstackError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LayerstackError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidMetadata(_) => ErrorKind::InvalidMetadata,
            Self::Render(_) => ErrorKind::Render,
            Self::Serde(_) => ErrorKind::Serde,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<serde_json::Error> for LayerstackError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
