use solsim::{Scenario, ScenarioConfig};
use solsim::euler_semi_implicit;
use solsim::run_2d;

use clap::Parser;
use anyhow::Result;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run without a window: integrate to t_end and print a summary
    #[arg(long)]
    headless: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario) -> Result<()> {
    let Scenario {
        system,
        parameters,
        forces,
        display,
    } = &mut scenario;

    let steps = parameters.frame_count();
    info!(
        "integrating {} bodies for {} steps of {} s",
        system.bodies.len(),
        steps,
        parameters.dt
    );

    for _ in 0..steps {
        euler_semi_implicit(system, forces, parameters)?;
    }

    info!("finished at t = {:.2} years", system.elapsed_years());
    for (body, disp) in system.bodies.iter().zip(display.iter()) {
        info!(
            "{:>8}: x = [{:+.3e}, {:+.3e}, {:+.3e}] m, |v| = {:.3e} m/s",
            disp.name, body.x.x, body.x.y, body.x.z, body.v.norm()
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        // The windowed path leaves logging to Bevy's LogPlugin instead
        env_logger::init();
        run_headless(scenario)?;
    } else {
        run_2d(scenario);
    }

    Ok(())
}
