//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while building shapes, applying transforms, computing
/// extents, or loading a declarative pipeline.
#[derive(Debug, Error)]
pub enum VariantError {
    /// A numeric or list field could not be converted.
    #[error("parse error: {0}")]
    Parse(String),

    /// No points were available to build or transform a shape.
    #[error("no points available to build a shape")]
    EmptyInput,

    /// An extent was requested over a registry holding zero variants.
    #[error("cannot compute an extent over an empty variant registry")]
    EmptyRegistry,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VariantError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        VariantError::Parse(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, VariantError>;
