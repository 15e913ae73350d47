use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// 100-nanosecond intervals per second.
pub const TICKS_PER_SECOND: u64 = 10_000_000;

const NANOS_PER_TICK: u64 = 100;

/// A count of 100-nanosecond intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticks(pub u64);

impl Ticks {
    pub fn from_duration(d: Duration) -> Self {
        let ticks = d.as_secs() * TICKS_PER_SECOND + u64::from(d.subsec_nanos()) / NANOS_PER_TICK;
        Ticks(ticks)
    }

    /// Ticks elapsed since the Unix epoch; times before it collapse to zero.
    pub fn since_epoch(at: SystemTime) -> Self {
        at.duration_since(UNIX_EPOCH)
            .map(Self::from_duration)
            .unwrap_or_default()
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / TICKS_PER_SECOND as f64
    }
}

impl std::ops::Add for Ticks {
    type Output = Ticks;

    fn add(self, rhs: Ticks) -> Ticks {
        Ticks(self.0 + rhs.0)
    }
}

/// Accounting for a terminated process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessTimes {
    pub creation: Ticks,
    pub exit: Ticks,
    pub kernel: Ticks,
    pub user: Ticks,
}

impl ProcessTimes {
    /// Kernel plus user time, in seconds.
    pub fn cpu_seconds(&self) -> f64 {
        (self.kernel + self.user).as_secs_f64()
    }

    pub fn wall_seconds(&self) -> f64 {
        Ticks(self.exit.0.saturating_sub(self.creation.0)).as_secs_f64()
    }
}
