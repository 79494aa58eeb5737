//! Command line interface for Orrery

use clap::Parser;

use crate::config::{IntegratorKind, SimulationConfig};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Orrery - interactive solar system visualizer
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Gravitational constant (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f64>,

    /// Integrator type
    #[arg(short = 'i', long, value_enum, value_name = "TYPE")]
    pub integrator: Option<IntegratorKind>,

    /// Simulated seconds per wall-clock second (overrides config file)
    #[arg(long, value_name = "FACTOR")]
    pub time_scale: Option<f64>,

    /// Sub-steps per frame (overrides config file)
    #[arg(long, value_name = "COUNT")]
    pub substeps: Option<u32>,

    /// Random seed for the starfield
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Loads configuration from file or defaults, then applies command-line
/// overrides
pub fn load_and_apply_config(args: &Args) -> SimulationConfig {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(gravity) = args.gravity {
        println!("Overriding gravitational constant to: {gravity}");
        config.physics.gravitational_constant = gravity;
    }

    if let Some(integrator) = args.integrator {
        println!("Using integrator: {integrator:?}");
        config.physics.integrator = integrator;
    }

    if let Some(time_scale) = args.time_scale {
        println!("Overriding time scale to: {time_scale}");
        config.physics.time_scale = time_scale;
    }

    if let Some(substeps) = args.substeps {
        println!("Overriding sub-step count to: {substeps}");
        config.physics.substeps = substeps;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.physics.initial_seed = Some(seed);
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let args = Args::parse_from([
            "orrery",
            "--gravity",
            "1.0",
            "--time-scale",
            "500",
            "--substeps",
            "10",
            "--integrator",
            "explicit_euler",
            "--seed",
            "42",
        ]);
        let config = load_and_apply_config(&args);

        assert_eq!(config.physics.gravitational_constant, 1.0);
        assert_eq!(config.physics.time_scale, 500.0);
        assert_eq!(config.physics.substeps, 10);
        assert_eq!(config.physics.integrator, IntegratorKind::ExplicitEuler);
        assert_eq!(config.physics.initial_seed, Some(42));
    }
}
