use std::path::PathBuf;

use macroquad::prelude::Conf;
use parabolic_rust::core::config::SimulatorConfig;
use parabolic_rust::core::simulation::Simulation;
use tracing_subscriber::EnvFilter;

mod app;
mod constants;
mod controls;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

fn load_simulation() -> parabolic_rust::Result<(Simulation, String)> {
    let explicit = std::env::var_os("PARABOLIC_CONFIG").map(PathBuf::from);
    let config = SimulatorConfig::resolve(explicit.as_deref())?;
    let sim = Simulation::new(config.inputs()?, config.animation()?);
    Ok((sim, config.log_filter))
}

#[macroquad::main(window_conf)]
async fn main() {
    let (sim, log_filter) = match load_simulation() {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    app::run(sim).await;
}
