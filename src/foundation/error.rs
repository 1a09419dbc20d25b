/// Crate-wide result alias.
pub type StitchResult<T> = Result<T, StitchError>;

/// Errors produced while building, reconciling, or encoding frame batches.
#[derive(thiserror::Error, Debug)]
pub enum StitchError {
    /// Malformed construction arguments or out-of-range indices.
    #[error("validation error: {0}")]
    Validation(String),

    /// Incompatible tensor dimensions, reported by the primitive that hit
    /// them (concat, crop). Never corrected upstream.
    #[error("shape mismatch: {0}")]
    Shape(String),

    /// A frame could not be quantized for encoding.
    #[error("encode error: {0}")]
    Encode(String),

    /// IO or decode failure from an underlying library.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StitchError {
    /// Build a [`StitchError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StitchError::Shape`].
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`StitchError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
