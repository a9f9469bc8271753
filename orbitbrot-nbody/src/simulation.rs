use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::body::Body;
use crate::error::NBodyError;
use crate::forces::{accumulate_forces, Force};
use crate::integrator::{integrate, Bounds};

/// Upper limit on the number of simulated bodies.
pub const MAX_BODIES: usize = 10_000;

/// Time step used until [`Simulation::set_time_step`] is called.
pub const DEFAULT_TIME_STEP: f64 = 0.008;

/// Values per body in [`Simulation::simulation_data`]: `x, y, radius, color`.
pub const VALUES_PER_BODY: usize = 4;

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

/// A set of bodies bouncing around a box under mutual gravity.
///
/// Each [`update_positions`](Self::update_positions) call evaluates all
/// pairwise forces from the current positions, then advances every body by
/// one time step. The force scratch buffer is kept between frames so the
/// steady frame loop does not allocate.
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    forces: Vec<Force>,
    bounds: Bounds,
    time_step: f64,
}

impl Simulation {
    /// An empty simulation in an 800 × 600 box.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            forces: Vec::new(),
            bounds: Bounds {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            },
            time_step: DEFAULT_TIME_STEP,
        }
    }

    /// A simulation initialised from a fixed seed. Equal seeds give equal
    /// initial states.
    pub fn seeded(width: f64, height: f64, body_count: usize, seed: u64) -> Self {
        let mut sim = Self::new();
        sim.init(width, height, body_count, &mut StdRng::seed_from_u64(seed));
        sim
    }

    /// Build a simulation from explicit bodies.
    pub fn from_bodies(width: f64, height: f64, bodies: Vec<Body>) -> crate::Result<Self> {
        if bodies.len() > MAX_BODIES {
            return Err(NBodyError::TooManyBodies {
                count: bodies.len(),
                max: MAX_BODIES,
            });
        }
        if let Some((index, body)) = bodies
            .iter()
            .enumerate()
            .find(|(_, b)| !(b.mass > 0.0 && b.mass.is_finite()))
        {
            return Err(NBodyError::InvalidMass {
                index,
                mass: body.mass,
            });
        }
        Ok(Self {
            forces: vec![Force::default(); bodies.len()],
            bodies,
            bounds: Bounds { width, height },
            time_step: DEFAULT_TIME_STEP,
        })
    }

    /// Replace every body with `body_count` random ones inside a
    /// `width × height` box.
    ///
    /// Counts above [`MAX_BODIES`] are truncated. The time step is kept.
    pub fn init<R: Rng + ?Sized>(
        &mut self,
        width: f64,
        height: f64,
        body_count: usize,
        rng: &mut R,
    ) {
        let count = body_count.min(MAX_BODIES);
        if count < body_count {
            debug!(requested = body_count, count, "Body count truncated");
        }

        self.bounds = Bounds { width, height };
        self.bodies = (0..count)
            .map(|_| Body::random(rng, width, height))
            .collect();
        self.forces = vec![Force::default(); count];

        info!(count, width, height, "Simulation initialised");
    }

    /// Advance the whole system by one time step.
    pub fn update_positions(&mut self) {
        accumulate_forces(&self.bodies, &mut self.forces);
        integrate(&mut self.bodies, &self.forces, self.time_step, self.bounds);
    }

    /// Per body `[x, y, radius, color]`, where `color` carries the packed
    /// RGBA bits unchanged (see [`color_to_bits`]).
    pub fn simulation_data(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.bodies.len() * VALUES_PER_BODY);
        self.write_simulation_data(&mut out);
        out
    }

    /// Like [`simulation_data`](Self::simulation_data) but reuses `out`.
    pub fn write_simulation_data(&self, out: &mut Vec<f64>) {
        out.clear();
        out.reserve(self.bodies.len() * VALUES_PER_BODY);
        for b in &self.bodies {
            out.extend_from_slice(&[b.x, b.y, b.radius, color_to_bits(b.color)]);
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Set the time step. Non-positive steps are accepted as given.
    pub fn set_time_step(&mut self, time_step: f64) {
        if time_step <= 0.0 || !time_step.is_finite() {
            warn!(time_step, "Non-positive or non-finite time step");
        }
        self.time_step = time_step;
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    /// Sum of `m·v` over all bodies.
    pub fn total_momentum(&self) -> (f64, f64) {
        self.bodies.iter().fold((0.0, 0.0), |(px, py), b| {
            let (mx, my) = b.momentum();
            (px + mx, py + my)
        })
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// `true` if every body lies inside the box, edges included.
    pub fn all_in_bounds(&self) -> bool {
        self.bodies.iter().all(|b| {
            (0.0..=self.bounds.width).contains(&b.x) && (0.0..=self.bounds.height).contains(&b.y)
        })
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Carry a packed RGBA value in an `f64` by reinterpreting its bits.
#[inline]
pub fn color_to_bits(color: u32) -> f64 {
    f64::from_bits(color as u64)
}

/// Inverse of [`color_to_bits`].
#[inline]
pub fn unpack_color(value: f64) -> u32 {
    value.to_bits() as u32
}
