/// Result alias used across the crate.
pub type BrellaResult<T> = Result<T, BrellaError>;

/// Error type for configuration, rendering and encoding failures.
#[derive(thiserror::Error, Debug)]
pub enum BrellaError {
    /// Invalid configuration or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster backend failure.
    #[error("render error: {0}")]
    Render(String),

    /// Frame sink or encoder failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Any other error with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrellaError {
    /// Build a [`BrellaError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrellaError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BrellaError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
