use orbitsim::{ScenarioConfig, Simulator};
use orbitsim::{run_2d, SECONDS_PER_DAY};

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Newtonian orbit simulator for the Sun and inner planets")]
struct Args {
    /// Scenario YAML, looked up in the crate's scenarios/ directory unless the path exists.
    /// The built-in solar system is used when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run without a window and log the final state
    #[arg(long)]
    headless: bool,

    /// Number of ticks for a headless run
    #[arg(long, default_value_t = 365)]
    steps: u64,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_simulator(args: &Args) -> Result<Simulator> {
    match &args.file_name {
        Some(file_name) => {
            let config_path = scenario_path(file_name);
            log::info!("loading scenario {}", config_path.display());
            let scenario_cfg = ScenarioConfig::from_yaml_file(&config_path)?;
            Simulator::build_scenario(scenario_cfg)
        }
        None => Ok(Simulator::solar_system()),
    }
}

fn run_headless(mut simulator: Simulator, steps: u64) {
    simulator.run(steps);

    let au = simulator.parameters.au;
    log::info!("{} steps, {:.1} days simulated", simulator.system.steps, simulator.system.t / SECONDS_PER_DAY);
    if let Some(anchor) = simulator.system.anchor_body() {
        log::info!("distances measured from {}", anchor.name);
    }
    for b in simulator.bodies() {
        log::info!(
            "{:>8}: ({:+.4}, {:+.4}) AU, {:.4} AU from anchor, {} path points",
            b.name,
            b.x.x / au,
            b.x.y / au,
            b.distance_to_anchor / au,
            b.path.len(),
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // bevy installs its own logger for windowed runs
    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let simulator = load_simulator(&args)?;

    if args.headless {
        run_headless(simulator, args.steps);
    }
    else {
        run_2d(simulator);
    }

    Ok(())
}
