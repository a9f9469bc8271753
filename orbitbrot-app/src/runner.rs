//! The two frame loops the driver runs: one fractal frame, then a batch of
//! N-body steps.

use std::path::Path;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

use orbitbrot_core::{Complex, Viewport};
use orbitbrot_nbody::Simulation;
use orbitbrot_render::{export_png, FractalRenderer, RenderError};

use crate::preferences::Preferences;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Set up the configured view, apply the zoom steps and render one frame.
///
/// The view is validated both as configured and after the zoom steps, so a
/// zero-sized canvas or a zoom that is not positive and finite is reported as
/// [`RenderError::Core`] before anything is rendered.
pub fn render_view(prefs: &Preferences) -> Result<FractalRenderer, RunError> {
    let (x, y, zoom) = prefs.initial_view();
    let mut view = Viewport::new(Complex::new(x, y), zoom, prefs.width, prefs.height)
        .map_err(RenderError::from)?;

    let (focus_x, focus_y) = (prefs.width as f64 / 2.0, prefs.height as f64 / 2.0);
    for _ in 0..prefs.zoom_steps {
        view.zoom_view(prefs.zoom_factor, focus_x, focus_y);
    }
    let view = Viewport::new(view.center, view.zoom, view.width, view.height)
        .map_err(RenderError::from)?;

    let mut renderer = FractalRenderer::new(view.width, view.height);
    renderer.set_view(view.center.re, view.center.im, view.zoom);
    debug!(
        center_x = renderer.center_x(),
        center_y = renderer.center_y(),
        zoom = renderer.zoom(),
        "View ready"
    );

    renderer.render_fractal_parallel(prefs.band_rows)?;
    Ok(renderer)
}

/// Render and write the fractal frame to `output`.
pub fn export_view(prefs: &Preferences, output: &Path) -> Result<FractalRenderer, RunError> {
    let renderer = render_view(prefs)?;
    export_png(renderer.output_buffer(), renderer.viewport(), output)?;
    info!("Wrote {}", output.display());
    Ok(renderer)
}

/// What happened over one N-body run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub body_count: usize,
    pub steps: u32,
    pub elapsed: Duration,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub final_momentum: (f64, f64),
    /// Frames after which some body was outside the box.
    pub out_of_bounds_frames: u32,
}

/// Seed a simulation from the preferences and step it `prefs.steps` times,
/// reading the flat state buffer back after every frame.
pub fn run_simulation(prefs: &Preferences) -> SimulationReport {
    let start = Instant::now();
    let mut sim = Simulation::seeded(
        prefs.width as f64,
        prefs.height as f64,
        prefs.body_count,
        prefs.seed,
    );
    sim.set_time_step(prefs.time_step);

    let initial_energy = sim.kinetic_energy();
    let mut frame = Vec::new();
    let mut out_of_bounds_frames = 0;
    for _ in 0..prefs.steps {
        sim.update_positions();
        sim.write_simulation_data(&mut frame);
        if !sim.all_in_bounds() {
            out_of_bounds_frames += 1;
        }
    }

    let report = SimulationReport {
        body_count: sim.body_count(),
        steps: prefs.steps,
        elapsed: start.elapsed(),
        initial_energy,
        final_energy: sim.kinetic_energy(),
        final_momentum: sim.total_momentum(),
        out_of_bounds_frames,
    };
    if report.out_of_bounds_frames > 0 {
        warn!(frames = report.out_of_bounds_frames, "Bodies escaped the box");
    }
    info!(
        bodies = report.body_count,
        steps = report.steps,
        elapsed_ms = report.elapsed.as_millis(),
        initial_energy = report.initial_energy,
        final_energy = report.final_energy,
        "Simulation complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_prefs() -> Preferences {
        Preferences {
            width: 64,
            height: 48,
            body_count: 12,
            steps: 50,
            ..Preferences::default()
        }
    }

    #[test]
    fn render_view_applies_zoom_steps() {
        let mut prefs = small_prefs();
        prefs.zoom_steps = 3;
        prefs.zoom_factor = 2.0;
        let renderer = render_view(&prefs).unwrap();
        assert_eq!(renderer.zoom(), 8.0);
        assert_eq!(renderer.center_x(), -0.7);
        assert_eq!(renderer.output_buffer().len(), 64 * 48 * 4);
    }

    #[test]
    fn zero_sized_canvas_is_rejected_before_rendering() {
        for (width, height) in [(0, 48), (64, 0)] {
            let prefs = Preferences {
                width,
                height,
                ..small_prefs()
            };
            assert!(matches!(
                render_view(&prefs),
                Err(RunError::Render(RenderError::Core(_)))
            ));
        }
    }

    #[test]
    fn non_positive_zoom_is_rejected_before_rendering() {
        for zoom in [0.0, -2.0, f64::NAN] {
            let prefs = Preferences {
                zoom,
                ..small_prefs()
            };
            assert!(matches!(
                render_view(&prefs),
                Err(RunError::Render(RenderError::Core(_)))
            ));
        }
    }

    #[test]
    fn zoom_steps_collapsing_the_view_are_rejected() {
        let prefs = Preferences {
            zoom_steps: 2,
            zoom_factor: 0.0,
            ..small_prefs()
        };
        assert!(matches!(
            render_view(&prefs),
            Err(RunError::Render(RenderError::Core(_)))
        ));
    }

    #[test]
    fn export_rejects_invalid_view_without_writing() {
        let dir = std::env::temp_dir().join("orbitbrot_test_runner_invalid");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("frame.png");
        let prefs = Preferences {
            width: 0,
            ..small_prefs()
        };
        assert!(export_view(&prefs, &path).is_err());
        assert!(!path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_view_writes_png() {
        let dir = std::env::temp_dir().join("orbitbrot_test_runner");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("frame.png");
        export_view(&small_prefs(), &path).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn simulation_run_is_reproducible_and_bounded() {
        let prefs = small_prefs();
        let a = run_simulation(&prefs);
        let b = run_simulation(&prefs);
        assert_eq!(a.body_count, 12);
        assert_eq!(a.out_of_bounds_frames, 0);
        assert_eq!(a.final_energy, b.final_energy);
        assert_eq!(a.final_momentum, b.final_momentum);
    }
}
