use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use orbitbrot_core::Viewport;

use crate::band::build_row_bands;
use crate::buffer::RenderBuffer;
use crate::error::RenderError;
use crate::kernel::{render_rows, shade_rows};
use crate::palette::ColorPalette;

/// Owns the view, the color table and the RGBA frame for one canvas.
///
/// The view is changed through [`set_view`](Self::set_view),
/// [`move_view`](Self::move_view) and [`zoom_view`](Self::zoom_view); a frame
/// is produced by [`render_fractal`](Self::render_fractal), by the banded
/// parallel variant, or piecewise through
/// [`render_fractal_region`](Self::render_fractal_region).
#[derive(Debug, Clone)]
pub struct FractalRenderer {
    viewport: Viewport,
    palette: ColorPalette,
    buffer: RenderBuffer,
}

impl FractalRenderer {
    /// A renderer for a `width × height` canvas showing the default view.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::default_view(width, height),
            palette: ColorPalette::new(),
            buffer: RenderBuffer::new(width, height),
        }
    }

    /// Reallocate the frame for a new canvas size and rebuild the palette.
    ///
    /// Center and zoom are kept.
    pub fn init(&mut self, width: u32, height: u32) {
        debug!(width, height, "Reallocating output buffer");
        self.viewport.resize(width, height);
        self.buffer = RenderBuffer::new(width, height);
        self.palette = ColorPalette::new();
    }

    pub fn set_view(&mut self, x: f64, y: f64, zoom: f64) {
        self.viewport.set_view(x, y, zoom);
    }

    pub fn move_view(&mut self, dx: f64, dy: f64) {
        self.viewport.move_view(dx, dy);
    }

    pub fn zoom_view(&mut self, factor: f64, focus_x: f64, focus_y: f64) {
        self.viewport.zoom_view(factor, focus_x, focus_y);
    }

    /// Shade every pixel of the frame, row-major, on the calling thread.
    pub fn render_fractal(&mut self) {
        let start = Instant::now();
        let height = self.viewport.height;
        shade_rows(&self.viewport, &self.palette, 0, self.buffer.pixels_mut());
        info!(
            elapsed_ms = start.elapsed().as_millis(),
            width = self.viewport.width,
            height,
            "Frame rendered"
        );
    }

    /// Shade rows `[start_row, min(end_row, height))`.
    ///
    /// Rows outside that range are left untouched. `start_row > end_row` is
    /// rejected rather than silently rendering nothing.
    pub fn render_fractal_region(&mut self, start_row: u32, end_row: u32) -> crate::Result<()> {
        if start_row > end_row {
            return Err(RenderError::InvalidRowRange {
                start: start_row,
                end: end_row,
            });
        }
        let height = self.viewport.height;
        let end = end_row.min(height);
        let start = start_row.min(end);
        let rows = self.buffer.rows_mut(start, end);
        render_rows(&self.viewport, &self.palette, start, rows)
    }

    /// Shade the full frame by splitting it into bands of `band_rows` rows
    /// and rendering the bands in parallel on the rayon pool.
    ///
    /// The result is identical to [`render_fractal`](Self::render_fractal).
    pub fn render_fractal_parallel(&mut self, band_rows: u32) -> crate::Result<()> {
        let start = Instant::now();
        let band_rows = band_rows.max(1);
        let bands = build_row_bands(self.viewport.height, band_rows);
        let stride = self.buffer.stride();
        if bands.is_empty() || stride == 0 {
            return Ok(());
        }
        debug!(band_count = bands.len(), band_rows, "Starting banded render");

        let viewport = &self.viewport;
        let palette = &self.palette;
        self.buffer
            .pixels_mut()
            .par_chunks_mut(stride * band_rows as usize)
            .zip(bands.par_iter())
            .try_for_each(|(rows, band)| render_rows(viewport, palette, band.start, rows))?;

        info!(
            elapsed_ms = start.elapsed().as_millis(),
            band_count = bands.len(),
            "Frame rendered in parallel"
        );
        Ok(())
    }

    /// The RGBA frame, `width * height * 4` bytes, row-major.
    pub fn output_buffer(&self) -> &[u8] {
        self.buffer.pixels()
    }

    pub fn buffer(&self) -> &RenderBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn center_x(&self) -> f64 {
        self.viewport.center.re
    }

    pub fn center_y(&self) -> f64 {
        self.viewport.center.im
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }
}
