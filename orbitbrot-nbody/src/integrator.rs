//! Semi-implicit Euler step with damped reflection at the box edges.

use crate::body::Body;
use crate::forces::Force;

/// Fraction of speed kept, with reversed sign, when a body hits a wall.
pub const RESTITUTION: f64 = 0.9;

/// The box bodies are kept in: `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Advance every body by `time_step`.
///
/// All velocities are updated from `forces` first, then all positions from
/// the new velocities. `forces` must come from the positions the bodies had
/// before this call.
pub fn integrate(bodies: &mut [Body], forces: &[Force], time_step: f64, bounds: Bounds) {
    debug_assert_eq!(bodies.len(), forces.len());

    for (body, force) in bodies.iter_mut().zip(forces) {
        body.vx += force.fx / body.mass * time_step;
        body.vy += force.fy / body.mass * time_step;
    }

    for body in bodies.iter_mut() {
        body.x += body.vx * time_step;
        body.y += body.vy * time_step;
        reflect(&mut body.x, &mut body.vx, bounds.width);
        reflect(&mut body.y, &mut body.vy, bounds.height);
    }
}

/// Clamp `pos` into `[0, max]`, reversing and damping `vel` if it was outside.
#[inline]
fn reflect(pos: &mut f64, vel: &mut f64, max: f64) {
    if *pos < 0.0 || *pos > max {
        *vel *= -RESTITUTION;
        *pos = if *pos < 0.0 { 0.0 } else { max };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn free_body_moves_in_a_straight_line() {
        let mut bodies = [Body::new(100.0, 100.0, 10.0, -5.0, 1.0, 0)];
        integrate(&mut bodies, &[Force::default()], 0.5, BOUNDS);
        assert_eq!((bodies[0].x, bodies[0].y), (105.0, 97.5));
        assert_eq!((bodies[0].vx, bodies[0].vy), (10.0, -5.0));
    }

    #[test]
    fn position_uses_updated_velocity() {
        let mut bodies = [Body::new(100.0, 100.0, 0.0, 0.0, 2.0, 0)];
        let forces = [Force { fx: 4.0, fy: 0.0 }];
        integrate(&mut bodies, &forces, 0.5, BOUNDS);
        // v = 0 + 4/2 * 0.5 = 1, x = 100 + 1 * 0.5
        assert_eq!(bodies[0].vx, 1.0);
        assert_eq!(bodies[0].x, 100.5);
    }

    #[test]
    fn crossing_right_wall_clamps_and_damps() {
        let mut bodies = [Body::new(799.0, 300.0, 1000.0, 0.0, 1.0, 0)];
        integrate(&mut bodies, &[Force::default()], 0.008, BOUNDS);
        assert_eq!(bodies[0].x, 800.0);
        assert_eq!(bodies[0].vx, -900.0);
        assert_eq!(bodies[0].vy, 0.0);
    }

    #[test]
    fn crossing_top_wall_clamps_to_zero() {
        let mut bodies = [Body::new(400.0, 0.5, 0.0, -200.0, 1.0, 0)];
        integrate(&mut bodies, &[Force::default()], 0.01, BOUNDS);
        assert_eq!(bodies[0].y, 0.0);
        assert_eq!(bodies[0].vy, 180.0);
    }

    #[test]
    fn touching_a_wall_is_not_a_collision() {
        let mut bodies = [Body::new(790.0, 300.0, 1000.0, 0.0, 1.0, 0)];
        integrate(&mut bodies, &[Force::default()], 0.01, BOUNDS);
        assert_eq!(bodies[0].x, 800.0);
        assert_eq!(bodies[0].vx, 1000.0);
    }
}
