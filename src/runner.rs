use std::process::ExitStatus;

use tracing::info;

use crate::cli::Cli;
use crate::cmdline::CommandLine;
use crate::energy::{EnergyModel, ModelKind};
use crate::error::{EnergyError, Result};
use crate::sys;
use crate::times::ProcessTimes;

pub struct RunResult {
    pub command: CommandLine,
    pub times: ProcessTimes,
    pub cpu_seconds: f64,
    pub model: ModelKind,
    pub power_w: f64,
    pub energy_j: f64,
    pub exit_status: ExitStatus,
}

impl RunResult {
    pub fn wall_seconds(&self) -> f64 {
        self.times.wall_seconds()
    }
}

pub fn run_command<F>(cli: &Cli, on_launch: F) -> Result<RunResult>
where
    F: FnOnce(&CommandLine) -> Result<()>,
{
    cli.validate().map_err(EnergyError::InvalidArg)?;
    let command = CommandLine::assemble(&cli.command)?;
    let model = cli.model.build(cli.watts);
    measure(command, model.as_ref(), on_launch)
}

/// Runs `command` to completion and charges it against `model`.
///
/// `on_launch` fires once the process exists and before waiting on it.
pub fn measure<M, F>(command: CommandLine, model: &M, on_launch: F) -> Result<RunResult>
where
    M: EnergyModel + ?Sized,
    F: FnOnce(&CommandLine) -> Result<()>,
{
    let mut guard = sys::launch(&command)?;
    on_launch(&command)?;

    guard.wait_for_exit()?;
    let (times, exit_status) = guard.query_times()?;
    drop(guard);

    let cpu_seconds = times.cpu_seconds();
    let energy_j = model.energy_joules(&times);
    info!(
        command = %command,
        cpu_seconds,
        energy_j,
        model = ?model.kind(),
        exit_code = exit_status.code(),
        "measured run"
    );

    Ok(RunResult {
        command,
        times,
        cpu_seconds,
        model: model.kind(),
        power_w: model.power_watts(),
        energy_j,
        exit_status,
    })
}
