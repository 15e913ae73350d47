use crate::energy::{EnergyModel, ModelKind};
use crate::times::ProcessTimes;

/// Charges the whole time the process was alive, busy or idle, at a constant
/// wattage. Stands in for a machine-level meter when none is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallClockPower {
    watts: f64,
}

impl WallClockPower {
    pub fn new(watts: f64) -> Self {
        Self { watts }
    }
}

impl EnergyModel for WallClockPower {
    fn kind(&self) -> ModelKind {
        ModelKind::Wall
    }

    fn power_watts(&self) -> f64 {
        self.watts
    }

    fn energy_joules(&self, times: &ProcessTimes) -> f64 {
        times.wall_seconds() * self.watts
    }
}
