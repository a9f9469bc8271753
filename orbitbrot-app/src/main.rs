use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

mod app_dir;
mod preferences;
mod runner;

use preferences::Preferences;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting orbitbrot");

    let prefs_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(app_dir::default_preferences_path);
    let mut prefs = Preferences::load(&prefs_path);

    let output = app_dir::resolve_output(&prefs_path, &prefs.output_png);
    let renderer = match runner::export_view(&prefs, &output) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("Fractal pass failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = runner::run_simulation(&prefs);
    info!(
        momentum_x = report.final_momentum.0,
        momentum_y = report.final_momentum.1,
        "N-body pass finished"
    );

    prefs.last_view = Some(*renderer.viewport());
    prefs.save(&prefs_path);

    if report.out_of_bounds_frames > 0 {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
