use thiserror::Error;

/// Errors from building a simulation out of caller-supplied bodies.
#[derive(Debug, Error)]
pub enum NBodyError {
    #[error("too many bodies: {count} (limit is {max})")]
    TooManyBodies { count: usize, max: usize },

    #[error("body {index} has invalid mass {mass} (must be positive and finite)")]
    InvalidMass { index: usize, mass: f64 },
}
