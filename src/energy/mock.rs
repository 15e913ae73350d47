use std::cell::Cell;

use crate::energy::{EnergyModel, ModelKind};
use crate::times::ProcessTimes;

/// Energy model that counts how often it is consulted.
pub struct MockEnergy {
    pub watts: f64,
    pub calls: Cell<usize>,
}

impl MockEnergy {
    pub fn new(watts: f64) -> Self {
        Self {
            watts,
            calls: Cell::new(0),
        }
    }
}

impl EnergyModel for MockEnergy {
    fn kind(&self) -> ModelKind {
        ModelKind::Cpu
    }

    fn power_watts(&self) -> f64 {
        self.watts
    }

    fn energy_joules(&self, times: &ProcessTimes) -> f64 {
        self.calls.set(self.calls.get() + 1);
        times.cpu_seconds() * self.watts
    }
}
