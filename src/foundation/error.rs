/// Convenience result type used across the studio.
pub type StudioResult<T> = Result<T, StudioError>;

/// Top-level error taxonomy used by editor, assistant, and rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// Invalid user-provided data (blank AI brief, wrong template family, bad config).
    #[error("validation error: {0}")]
    Validation(String),

    /// Image bytes or embedded payloads that could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Rasterization or encoding failures.
    #[error("render error: {0}")]
    Render(String),

    /// The generative service was unreachable or answered with an error.
    #[error("remote service error: {0}")]
    Remote(String),

    /// A remote call did not finish within the configured deadline.
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudioError {
    /// Build a [`StudioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StudioError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`StudioError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StudioError::Remote`] value.
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Build a [`StudioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
