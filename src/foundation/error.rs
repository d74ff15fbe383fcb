use crate::measure::AlignmentLine;

/// Convenience result type used across stagger.
pub type StaggerResult<T> = Result<T, StaggerError>;

/// Top-level error taxonomy used by layout APIs.
#[derive(thiserror::Error, Debug)]
pub enum StaggerError {
    /// An argument outside the domain of a layout operation (for example `rows <= 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A measured child was asked for an alignment line it never reported.
    #[error("unsupported alignment line: {0}")]
    UnsupportedAlignmentLine(AlignmentLine),

    /// Invalid user-provided or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StaggerError {
    /// Build a [`StaggerError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`StaggerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StaggerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
