use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use chrono::Local;
use simulator::{SimulationType, SimulatorInterface};
use tangle::utils::logging;

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Usage: `simulator [simple|sweep_lambda|sweep_alpha|sweep_latency|all] [config.toml]`.
/// Without arguments the interactive menu is shown.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(e) = fs::create_dir_all("simulator/results") {
        eprintln!("Failed to create results directory: {}", e);
        return ExitCode::FAILURE;
    }
    logging::init_logging();
    logging::log("SIMULATOR", &format!("Start Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));

    let args: Vec<String> = env::args().skip(1).collect();
    let interface = SimulatorInterface::new();

    let outcome = match args.first() {
        None => interface.run_interactive().await,
        Some(name) => match SimulationType::from_input(name) {
            Some(choice) => {
                let config_path = args.get(1).map(PathBuf::from);
                interface.run(choice, config_path.as_deref()).await
            }
            None => {
                eprintln!("Unknown simulation type: {}", name);
                eprintln!("{}", interface.get_menu_text());
                return ExitCode::FAILURE;
            }
        },
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
