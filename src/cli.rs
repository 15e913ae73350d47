use clap::Parser;

use crate::energy::{ASSUMED_POWER_W, ModelKind};

#[derive(Parser, Debug)]
#[command(
    name = "cpu-energy",
    version,
    about = "Estimate the energy a command spends on the CPU"
)]
pub struct Cli {
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Average CPU power draw assumed while the command runs, in watts.
    #[arg(long, default_value_t = ASSUMED_POWER_W)]
    pub watts: f64,

    /// Time the wattage is charged against.
    #[arg(long, value_enum, default_value_t = ModelKind::Cpu)]
    pub model: ModelKind,

    /// Program to run, followed by its arguments.
    // Not clap-required: a missing program goes through our own usage path.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if !self.watts.is_finite() || self.watts <= 0.0 {
            return Err("watts must be a finite number > 0".to_string());
        }

        Ok(())
    }
}
