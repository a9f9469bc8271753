use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Core(#[from] orbitbrot_core::CoreError),

    #[error("invalid row range: start {start} is past end {end}")]
    InvalidRowRange { start: u32, end: u32 },

    #[error("band of {len} bytes at row {start_row} does not fit a {width}×{height} frame")]
    BandOutOfBounds {
        start_row: u32,
        len: usize,
        width: u32,
        height: u32,
    },

    #[error("PNG export failed: {0}")]
    Export(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
