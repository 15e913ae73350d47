use crate::times::ProcessTimes;

pub mod fixed;
#[cfg(test)]
pub mod mock;
pub mod wall;

pub use fixed::{ASSUMED_POWER_W, FixedPower};
pub use wall::WallClockPower;

/// Converts a finished process's accounting into an energy figure.
pub trait EnergyModel {
    fn kind(&self) -> ModelKind;

    fn power_watts(&self) -> f64;

    fn energy_joules(&self, times: &ProcessTimes) -> f64;
}

/// Which quantity the wattage is charged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// User plus kernel CPU time of the process.
    #[default]
    Cpu,
    /// Elapsed time between creation and exit.
    Wall,
}

impl ModelKind {
    pub fn build(self, watts: f64) -> Box<dyn EnergyModel> {
        match self {
            ModelKind::Cpu => Box::new(FixedPower::new(watts)),
            ModelKind::Wall => Box::new(WallClockPower::new(watts)),
        }
    }
}
