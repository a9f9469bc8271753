use thiserror::Error;

/// Errors originating from the core fractal math.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },
}
