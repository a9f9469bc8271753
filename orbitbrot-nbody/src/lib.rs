pub mod body;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod simulation;

pub use body::{pack_rgba, radius_for_mass, Body};
pub use error::NBodyError;
pub use forces::{accumulate_forces, Force, G, SOFTENING};
pub use integrator::{integrate, Bounds, RESTITUTION};
pub use simulation::{
    color_to_bits, unpack_color, Simulation, DEFAULT_TIME_STEP, MAX_BODIES, VALUES_PER_BODY,
};

/// Convenience result type for the N-body crate.
pub type Result<T> = std::result::Result<T, NBodyError>;
