use crate::energy::{EnergyModel, ModelKind};
use crate::times::ProcessTimes;

/// Average draw assumed for a busy CPU, in watts.
pub const ASSUMED_POWER_W: f64 = 50.0;

/// Charges every CPU-second at a constant wattage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPower {
    watts: f64,
}

impl FixedPower {
    pub fn new(watts: f64) -> Self {
        Self { watts }
    }
}

impl Default for FixedPower {
    fn default() -> Self {
        Self::new(ASSUMED_POWER_W)
    }
}

impl EnergyModel for FixedPower {
    fn kind(&self) -> ModelKind {
        ModelKind::Cpu
    }

    fn power_watts(&self) -> f64 {
        self.watts
    }

    fn energy_joules(&self, times: &ProcessTimes) -> f64 {
        times.cpu_seconds() * self.watts
    }
}
