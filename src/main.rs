use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use parabolic_rust::core::animation::{RunState, TickOutcome};
use parabolic_rust::core::ballistics::SimulationInputs;
use parabolic_rust::core::config::SimulatorConfig;
use parabolic_rust::core::plot::{default_output_path, render_svg_file};
use parabolic_rust::core::simulation::Simulation;
use parabolic_rust::{Result, SimError};

#[derive(Debug, Parser)]
#[command(name = "parabolic_rust", version, about = "Projectile motion simulator")]
struct Cli {
    /// TOML config file (defaults to ./parabolic.toml when present).
    #[arg(long, global = true, env = "PARABOLIC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args)]
struct LaunchArgs {
    /// Initial speed in m/s [10, 100].
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<f64>,

    /// Launch angle in degrees [0, 90].
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the derived flight values.
    Report(LaunchArgs),

    /// Run the animation in the terminal, one line per tick.
    Animate {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Stop after this many ticks.
        #[arg(long)]
        max_ticks: Option<usize>,
    },

    /// Write the scene at a given time as SVG.
    Render {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Simulated time in seconds.
        #[arg(long, default_value_t = 0.0)]
        time: f64,

        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_inputs(args: &LaunchArgs, config: &SimulatorConfig) -> Result<SimulationInputs> {
    SimulationInputs::new(
        args.speed.unwrap_or(config.initial_speed_mps),
        args.angle.unwrap_or(config.angle_deg),
    )
}

fn read_f64(prompt: &str) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(SimError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended unexpectedly",
            )));
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_inputs_from_user() -> Result<SimulationInputs> {
    let speed = read_f64("Initial speed (m/s, 10-100): ")?;
    let angle = read_f64("Angle (degrees, 0-90): ")?;
    SimulationInputs::new(speed, angle)
}

fn print_report(inputs: SimulationInputs, config: &SimulatorConfig) -> Result<()> {
    let sim = Simulation::new(inputs, config.animation()?);
    let derived = sim.derived();

    println!();
    println!(
        "Velocity components: vx = {:.2} m/s, vy = {:.2} m/s",
        derived.velocity_x_mps, derived.velocity_y_mps
    );
    for line in sim.frame().readouts.lines() {
        println!("{line}");
    }
    Ok(())
}

fn animate(
    inputs: SimulationInputs,
    config: &SimulatorConfig,
    max_ticks: Option<usize>,
) -> Result<()> {
    let settings = config.animation()?;
    let mut sim = Simulation::new(inputs, settings);
    sim.start();
    print_frame(&sim);

    let mut fired_total = 0usize;
    let mut last = Instant::now();
    while sim.run_state() == RunState::Running {
        thread::sleep(settings.tick_period);
        let now = Instant::now();
        let fired = sim.advance(now - last);
        last = now;

        if fired > 0 && sim.run_state() == RunState::Running {
            print_frame(&sim);
        }
        fired_total += fired;
        if max_ticks.is_some_and(|limit| fired_total >= limit) {
            sim.stop();
            println!("Stopped after {fired_total} tick(s).");
            return Ok(());
        }
    }

    println!(
        "Landed at x = {:.1} m after {fired_total} tick(s).",
        sim.derived().max_range_m
    );
    Ok(())
}

fn print_frame(sim: &Simulation) {
    let frame = sim.frame();
    println!(
        "t = {:>5.2} s   x = {:>7.2} m   y = {:>6.2} m",
        frame.time_s, frame.position.x, frame.position.y
    );
}

/// Ticks a fresh run forward to `time_s`, rounded down to a whole step.
fn seek(sim: &mut Simulation, time_s: f64) -> Result<()> {
    if time_s == 0.0 {
        return Ok(());
    }
    let flight_s = sim.derived().flight_time_s;
    if !time_s.is_finite() || time_s < 0.0 || time_s >= flight_s {
        return Err(SimError::InvalidSetting {
            name: "time",
            reason: format!("must be within [0, {flight_s:.2}) s, got {time_s}"),
        });
    }

    let step = sim.settings().time_step_s;
    sim.start();
    while sim.time_s() + step <= time_s + 1e-9 {
        if sim.tick() != TickOutcome::Advanced {
            break;
        }
    }
    Ok(())
}

fn render(
    inputs: SimulationInputs,
    config: &SimulatorConfig,
    time_s: f64,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut sim = Simulation::new(inputs, config.animation()?);
    seek(&mut sim, time_s)?;

    let path = output.unwrap_or_else(|| default_output_path(&config.output_dir));
    render_svg_file(&sim.frame(), &path)?;
    println!("Scene written to {}", path.display());
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = SimulatorConfig::resolve(cli.config.as_deref())?;
    init_logging(&config.log_filter);
    info!(?config, "starting");

    match cli.command {
        None => {
            let inputs = get_inputs_from_user()?;
            print_report(inputs, &config)
        }
        Some(Command::Report(launch)) => print_report(resolve_inputs(&launch, &config)?, &config),
        Some(Command::Animate { launch, max_ticks }) => {
            animate(resolve_inputs(&launch, &config)?, &config, max_ticks)
        }
        Some(Command::Render {
            launch,
            time,
            output,
        }) => render(resolve_inputs(&launch, &config)?, &config, time, output),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
