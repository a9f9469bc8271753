use orbitbrot_core::IterationResult;

/// Number of entries in the color table.
pub const PALETTE_SIZE: usize = 256;

/// Palette steps advanced per unit of smooth iteration count.
const INDEX_SCALE: f64 = 10.0;

const INTERIOR: [u8; 4] = [0, 0, 0, 255];

/// A fixed ring of RGB colors built from three phase-shifted sine waves.
///
/// For entry `i`, with `t = i / 256`:
///
/// ```text
/// r = sin(5t)     * 0.5 + 0.5
/// g = sin(3t + 2) * 0.5 + 0.5
/// b = sin(9t + 1) * 0.5 + 0.5
/// ```
///
/// each scaled by 255 and truncated to a byte. The table is computed once and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: [[u8; 3]; PALETTE_SIZE],
}

impl ColorPalette {
    pub fn new() -> Self {
        let mut colors = [[0u8; 3]; PALETTE_SIZE];
        for (i, entry) in colors.iter_mut().enumerate() {
            let t = i as f64 / PALETTE_SIZE as f64;
            let r = (5.0 * t).sin() * 0.5 + 0.5;
            let g = (3.0 * t + 2.0).sin() * 0.5 + 0.5;
            let b = (9.0 * t + 1.0).sin() * 0.5 + 0.5;
            *entry = [channel(r), channel(g), channel(b)];
        }
        Self { colors }
    }

    /// The RGB triple at `index`.
    #[inline]
    pub fn entry(&self, index: usize) -> [u8; 3] {
        self.colors[index]
    }

    /// All entries in index order.
    pub fn entries(&self) -> &[[u8; 3]; PALETTE_SIZE] {
        &self.colors
    }

    /// Map one iteration result to an opaque RGBA color.
    ///
    /// Interior points are black. Escaped points pick the palette entry at
    /// [`palette_index`] of their smooth iteration value.
    #[inline]
    pub fn color(&self, result: IterationResult) -> [u8; 4] {
        match result {
            IterationResult::Interior => INTERIOR,
            IterationResult::Escaped {
                iterations,
                norm_sq,
            } => {
                let [r, g, b] = self.colors[palette_index(smooth_iteration(iterations, norm_sq))];
                [r, g, b, 255]
            }
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn channel(v: f64) -> u8 {
    (v * 255.0) as u8
}

/// Continuous escape value `n + 1 − log₂(log₂|z|)`.
///
/// Yields NaN when `|z| ≤ 1`; [`palette_index`] sends that to entry 0.
#[inline]
pub fn smooth_iteration(iterations: u32, norm_sq: f64) -> f64 {
    let log_zn = norm_sq.sqrt().ln();
    let nu = (log_zn / std::f64::consts::LN_2).ln() / std::f64::consts::LN_2;
    iterations as f64 + 1.0 - nu
}

/// `floor(smooth * 10) mod 256`, wrapping negatives into range.
///
/// NaN and infinite inputs map to 0.
#[inline]
pub fn palette_index(smooth: f64) -> usize {
    let scaled = (smooth * INDEX_SCALE).floor();
    if !scaled.is_finite() {
        return 0;
    }
    (scaled.rem_euclid(PALETTE_SIZE as f64)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_fixed_size_and_known_first_entry() {
        let p = ColorPalette::new();
        assert_eq!(p.entries().len(), PALETTE_SIZE);
        // t = 0: r = 0.5, g = sin(2)/2 + 0.5, b = sin(1)/2 + 0.5
        let g = ((2.0_f64.sin() * 0.5 + 0.5) * 255.0) as u8;
        let b = ((1.0_f64.sin() * 0.5 + 0.5) * 255.0) as u8;
        assert_eq!(p.entry(0), [127, g, b]);
    }

    #[test]
    fn palette_is_deterministic() {
        assert_eq!(ColorPalette::new(), ColorPalette::new());
    }

    #[test]
    fn interior_is_opaque_black() {
        let p = ColorPalette::new();
        assert_eq!(p.color(IterationResult::Interior), [0, 0, 0, 255]);
    }

    #[test]
    fn escaped_color_comes_from_palette() {
        let p = ColorPalette::new();
        for iterations in [1, 2, 7, 50, 999] {
            let result = IterationResult::Escaped {
                iterations,
                norm_sq: 9.0,
            };
            let c = p.color(result);
            assert_eq!(c[3], 255);
            let idx = palette_index(smooth_iteration(iterations, 9.0));
            assert_eq!([c[0], c[1], c[2]], p.entry(idx));
        }
    }

    #[test]
    fn smooth_iteration_at_escape_bound() {
        // |z| = 2 → log₂|z| = 1 → ν = 0.
        let s = smooth_iteration(3, 4.0);
        assert!((s - 4.0).abs() < 1e-12);
    }

    #[test]
    fn smooth_iteration_is_nan_inside_unit_circle() {
        assert!(smooth_iteration(5, 0.5).is_nan());
        assert!(smooth_iteration(5, 0.0).is_nan());
    }

    #[test]
    fn index_wraps_and_floors() {
        assert_eq!(palette_index(0.0), 0);
        assert_eq!(palette_index(1.29), 12);
        assert_eq!(palette_index(25.6), 0);
        assert_eq!(palette_index(26.0), 4);
        assert_eq!(palette_index(-0.05), 255);
    }

    #[test]
    fn index_of_non_finite_is_zero() {
        assert_eq!(palette_index(f64::NAN), 0);
        assert_eq!(palette_index(f64::INFINITY), 0);
        assert_eq!(palette_index(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn nan_escape_value_uses_first_entry() {
        let p = ColorPalette::new();
        let c = p.color(IterationResult::Escaped {
            iterations: 4,
            norm_sq: 0.25,
        });
        let [r, g, b] = p.entry(0);
        assert_eq!(c, [r, g, b, 255]);
    }
}
