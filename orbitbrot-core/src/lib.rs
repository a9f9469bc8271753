pub mod complex;
pub mod error;
pub mod mandelbrot;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use mandelbrot::{escape_time, iterate_orbit, IterationResult, MAX_ITERATIONS};
pub use viewport::{Viewport, VERTICAL_EXTENT};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
