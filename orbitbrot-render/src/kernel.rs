//! Per-pixel escape-time shading and the row-range seam built on it.

use orbitbrot_core::{escape_time, Viewport};

use crate::error::RenderError;
use crate::palette::ColorPalette;

/// Compute pixel `(px, py)` and write its RGBA bytes into `out[..4]`.
///
/// # Panics
///
/// Panics if `out` is shorter than 4 bytes.
#[inline]
pub fn shade_pixel(viewport: &Viewport, palette: &ColorPalette, px: u32, py: u32, out: &mut [u8]) {
    let c = viewport.pixel_to_complex(px, py);
    out[..4].copy_from_slice(&palette.color(escape_time(c)));
}

/// Shade a run of whole rows, the first of which is frame row `start_row`.
///
/// `rows` holds only the band being rendered, not the whole frame, so
/// callers can split one frame buffer into disjoint bands and shade them from
/// separate threads. The viewport and palette are read-only here.
pub fn render_rows(
    viewport: &Viewport,
    palette: &ColorPalette,
    start_row: u32,
    rows: &mut [u8],
) -> crate::Result<()> {
    let stride = viewport.width as usize * 4;
    let len = rows.len();
    let out_of_bounds = || RenderError::BandOutOfBounds {
        start_row,
        len,
        width: viewport.width,
        height: viewport.height,
    };

    if stride == 0 {
        return if len == 0 {
            Ok(())
        } else {
            Err(out_of_bounds())
        };
    }
    if len % stride != 0 {
        return Err(out_of_bounds());
    }
    let row_count = (len / stride) as u64;
    if start_row as u64 + row_count > viewport.height as u64 {
        return Err(out_of_bounds());
    }

    shade_rows(viewport, palette, start_row, rows);
    Ok(())
}

/// [`render_rows`] without the bounds checks, for callers that hand over
/// whole rows of a buffer sized to the viewport.
pub(crate) fn shade_rows(viewport: &Viewport, palette: &ColorPalette, start_row: u32, rows: &mut [u8]) {
    let stride = viewport.width as usize * 4;
    if stride == 0 {
        return;
    }
    for (i, row) in rows.chunks_exact_mut(stride).enumerate() {
        let py = start_row + i as u32;
        for (px, pixel) in row.chunks_exact_mut(4).enumerate() {
            shade_pixel(viewport, palette, px as u32, py, pixel);
        }
    }
}
