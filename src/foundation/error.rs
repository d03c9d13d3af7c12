/// Convenience result type used across pixelspace.
pub type PixelResult<T> = Result<T, PixelError>;

/// Error taxonomy for color-space operations.
///
/// Every variant except [`PixelError::Other`] describes a broken caller contract:
/// the failing call performed no writes.
#[derive(thiserror::Error, Debug)]
pub enum PixelError {
    /// Invalid caller-provided parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pixel, mask or output buffer is too small for the requested geometry.
    #[error("buffer error: {0}")]
    Buffer(String),

    /// A channel index outside the color space's declared channel table.
    #[error("channel error: {0}")]
    Channel(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixelError {
    /// Build a [`PixelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixelError::Buffer`] value.
    pub fn buffer(msg: impl Into<String>) -> Self {
        Self::Buffer(msg.into())
    }

    /// Build a [`PixelError::Channel`] value.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Build a [`PixelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
