//! Brute-force pairwise gravity.

use crate::body::Body;

/// Gravitational constant in canvas units.
pub const G: f64 = 0.1;

/// Added to every squared separation so coincident bodies stay finite.
pub const SOFTENING: f64 = 1e-9;

/// Net force on one body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Force {
    pub fx: f64,
    pub fy: f64,
}

/// Fill `out[i]` with the net gravitational force every other body exerts on
/// body `i`.
///
/// Every ordered pair is evaluated, so a step costs `O(n²)`. Positions are
/// only read, which means the whole pass sees one consistent snapshot.
pub fn accumulate_forces(bodies: &[Body], out: &mut [Force]) {
    debug_assert_eq!(bodies.len(), out.len());

    for (i, (bi, force)) in bodies.iter().zip(out.iter_mut()).enumerate() {
        let mut fx = 0.0;
        let mut fy = 0.0;
        for (j, bj) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            let dx = bj.x - bi.x;
            let dy = bj.y - bi.y;
            let dist_sq = dx * dx + dy * dy + SOFTENING;
            let dist = dist_sq.sqrt();
            let f = G * bi.mass * bj.mass / dist_sq;
            fx += f * dx / dist;
            fy += f * dy / dist;
        }
        *force = Force { fx, fy };
    }
}
