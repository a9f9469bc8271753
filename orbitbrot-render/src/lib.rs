pub mod band;
pub mod buffer;
pub mod error;
pub mod export;
pub mod kernel;
pub mod palette;
pub mod renderer;

pub use band::{build_row_bands, RowBand, DEFAULT_BAND_ROWS};
pub use buffer::RenderBuffer;
pub use error::RenderError;
pub use export::export_png;
pub use kernel::{render_rows, shade_pixel};
pub use palette::{palette_index, smooth_iteration, ColorPalette, PALETTE_SIZE};
pub use renderer::FractalRenderer;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
