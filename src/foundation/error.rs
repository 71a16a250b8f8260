/// Convenience result type used across pleat.
pub type PleatResult<T> = Result<T, PleatError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PleatError {
    /// Invalid user-provided fold or session data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding a pattern file.
    #[error("import error: {0}")]
    Import(String),

    /// Errors when serializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PleatError {
    /// Build a [`PleatError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PleatError::Import`] value.
    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    /// Build a [`PleatError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
