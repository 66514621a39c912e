use std::io::{self, Write};
use std::path::Path;
use crate::simulation::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationType {
    Simple,
    SweepLambda,
    SweepAlpha,
    SweepLatency,
    RunAll,
    Exit,
}

impl SimulationType {
    /// Parses a menu number or a command line scenario name
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" | "simple" => Some(SimulationType::Simple),
            "2" | "sweep_lambda" => Some(SimulationType::SweepLambda),
            "3" | "sweep_alpha" => Some(SimulationType::SweepAlpha),
            "4" | "sweep_latency" => Some(SimulationType::SweepLatency),
            "5" | "all" => Some(SimulationType::RunAll),
            "0" | "exit" => Some(SimulationType::Exit),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SimulationType::Simple => "Simple simulation",
            SimulationType::SweepLambda => "Sweep arrival rate (lambda)",
            SimulationType::SweepAlpha => "Sweep bias strength (alpha)",
            SimulationType::SweepLatency => "Sweep network latency (h)",
            SimulationType::RunAll => "Run all scenarios",
            SimulationType::Exit => "Exit",
        }
    }
}

#[derive(Default)]
pub struct SimulatorInterface;

impl SimulatorInterface {
    pub fn new() -> Self {
        Self
    }

    pub fn get_menu_text(&self) -> &'static str {
        "Available simulation types:\n  1. Simple simulation\n  2. Sweep arrival rate (lambda)\n  3. Sweep bias strength (alpha)\n  4. Sweep network latency (h)\n  5. Run all scenarios\n  0. Exit"
    }

    pub fn show_menu(&self) {
        println!("=== Tangle Simulator ===");
        println!("{}", self.get_menu_text());
    }

    /// Reads one choice from stdin. `None` on invalid input or a closed stdin.
    pub fn get_user_choice(&self) -> Option<SimulationType> {
        print!("\nSelect simulation type (0-5): ");
        io::stdout().flush().ok()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => Some(SimulationType::Exit),
            Ok(_) => SimulationType::from_input(&input),
            Err(_) => None,
        }
    }

    /// Runs the chosen scenario, reading `config_path` instead of its default configuration
    pub async fn run(&self, choice: SimulationType, config_path: Option<&Path>) -> Result<(), SimulationError> {
        match choice {
            SimulationType::Simple => {
                crate::scenarios::sim_simple::run_simple_simulation(config_path).await?;
            }
            SimulationType::SweepLambda => {
                crate::scenarios::sim_sweep_lambda::run_sweep_lambda_simulation(config_path).await?;
            }
            SimulationType::SweepAlpha => {
                crate::scenarios::sim_sweep_alpha::run_sweep_alpha_simulation(config_path).await?;
            }
            SimulationType::SweepLatency => {
                crate::scenarios::sim_sweep_latency::run_sweep_latency_simulation(config_path).await?;
            }
            SimulationType::RunAll => crate::scenarios::run_all::run_all().await?,
            SimulationType::Exit => println!("Exiting..."),
        }
        Ok(())
    }

    /// Shows the menu until a valid choice is made, then runs it
    pub async fn run_interactive(&self) -> Result<(), SimulationError> {
        self.show_menu();
        loop {
            match self.get_user_choice() {
                Some(choice) => {
                    self.run(choice, None).await?;
                    if choice != SimulationType::Exit {
                        println!("{} completed successfully!", choice.name());
                    }
                    return Ok(());
                }
                None => {
                    println!("Invalid choice. Please enter 1, 2, 3, 4, 5, or 0 to exit.");
                    println!("{}", self.get_menu_text());
                }
            }
        }
    }
}
