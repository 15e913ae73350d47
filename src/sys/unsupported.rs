use std::process::ExitStatus;

use crate::cmdline::CommandLine;
use crate::error::{EnergyError, Result};
use crate::times::ProcessTimes;

// ERROR_NOT_SUPPORTED on Windows, the only other host this builds for.
const NOT_SUPPORTED: i32 = 50;

pub struct ProcessGuard(());

pub fn launch(_cmd: &CommandLine) -> Result<ProcessGuard> {
    Err(EnergyError::ProcessCreation {
        code: NOT_SUPPORTED,
    })
}

impl ProcessGuard {
    pub fn wait_for_exit(&mut self) -> Result<()> {
        Err(EnergyError::Wait {
            code: NOT_SUPPORTED,
        })
    }

    pub fn query_times(&mut self) -> Result<(ProcessTimes, ExitStatus)> {
        Err(EnergyError::TimesQuery {
            code: NOT_SUPPORTED,
        })
    }
}
