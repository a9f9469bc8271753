/// Default band height for parallel renders.
pub const DEFAULT_BAND_ROWS: u32 = 16;

/// A contiguous run of rows `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    pub start: u32,
    pub end: u32,
}

impl RowBand {
    /// Number of rows in this band.
    pub fn rows(&self) -> u32 {
        self.end - self.start
    }
}

/// Partition `height` rows into disjoint bands of at most `band_rows` rows.
///
/// The bands are in order and cover `[0, height)` exactly; the last one may
/// be shorter. A `band_rows` of zero is treated as one.
pub fn build_row_bands(height: u32, band_rows: u32) -> Vec<RowBand> {
    let step = band_rows.max(1);
    let mut bands = Vec::with_capacity(height.div_ceil(step) as usize);
    let mut start = 0;
    while start < height {
        let end = start + step.min(height - start);
        bands.push(RowBand { start, end });
        start = end;
    }
    bands
}
