use crate::complex::Complex;

/// Iteration cap. A point still bounded after this many steps is interior.
pub const MAX_ITERATIONS: u32 = 1000;

/// `|z|²` at or beyond which the orbit has escaped (`|z| ≥ 2`).
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// The result of iterating a single point.
///
/// Only raw iteration data lives here. The smooth-coloring formula is applied
/// by the coloring pass in `orbitbrot-render`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationResult {
    /// The orbit left the escape radius after `iterations` updates of
    /// `z ← z² + c`. `norm_sq` is `|z|²` at that moment.
    Escaped { iterations: u32, norm_sq: f64 },

    /// The point is inside the set: it lies in a region known in closed form,
    /// or did not escape within [`MAX_ITERATIONS`].
    Interior,
}

impl IterationResult {
    #[inline]
    pub fn is_interior(&self) -> bool {
        matches!(self, Self::Interior)
    }
}

/// Returns `true` if `c` lies strictly inside the main cardioid.
#[inline]
pub fn in_cardioid(re: f64, im: f64) -> bool {
    let im2 = im * im;
    let q = (re - 0.25) * (re - 0.25) + im2;
    q * (q + (re - 0.25)) < 0.25 * im2
}

/// Returns `true` if `c` lies strictly inside the period-2 bulb.
#[inline]
pub fn in_period2_bulb(re: f64, im: f64) -> bool {
    (re + 1.0) * (re + 1.0) + im * im < 0.0625
}

/// Classify `c` for the Mandelbrot set `z_{n+1} = z_n² + c`, `z₀ = 0`.
///
/// Points in the main cardioid or the period-2 bulb are reported interior
/// without iterating.
#[inline]
pub fn escape_time(c: Complex) -> IterationResult {
    if in_cardioid(c.re, c.im) || in_period2_bulb(c.re, c.im) {
        return IterationResult::Interior;
    }
    iterate_orbit(c)
}

/// Iterate the orbit of `c` with no interior shortcuts.
///
/// The loop keeps `x²` and `y²` from the previous step so each update costs
/// three multiplications.
pub fn iterate_orbit(c: Complex) -> IterationResult {
    let (x0, y0) = (c.re, c.im);
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let (mut x2, mut y2) = (0.0_f64, 0.0_f64);
    let mut iteration = 0;

    while x2 + y2 < ESCAPE_RADIUS_SQ && iteration < MAX_ITERATIONS {
        y = 2.0 * x * y + y0;
        x = x2 - y2 + x0;
        x2 = x * x;
        y2 = y * y;
        iteration += 1;
    }

    if iteration == MAX_ITERATIONS {
        IterationResult::Interior
    } else {
        IterationResult::Escaped {
            iterations: iteration,
            norm_sq: x2 + y2,
        }
    }
}
