use std::io::Write;

use serde::Serialize;

use crate::cmdline::CommandLine;
use crate::energy::ModelKind;
use crate::error::{EnergyError, Result};
use crate::runner::RunResult;

const JOULES_PER_KWH: f64 = 3_600_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn parse(format: &str) -> Result<Self> {
        match format {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(EnergyError::InvalidArg(format!(
                "Unknown output format: {other}"
            ))),
        }
    }
}

/// Announces a freshly created process. JSON output stays a single document,
/// so only the text format prints here.
pub fn print_launched<W: Write>(out: &mut W, format: Format, command: &CommandLine) -> Result<()> {
    if format == Format::Text {
        writeln!(out, "Process launched: {command}")?;
        out.flush()?;
    }
    Ok(())
}

pub fn print_result<W: Write>(out: &mut W, format: Format, result: &RunResult) -> Result<()> {
    match format {
        Format::Text => print_text(out, result),
        Format::Json => print_json(out, result),
    }
}

fn print_text<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    writeln!(out, "Total CPU time used: {} seconds", result.cpu_seconds)?;
    writeln!(out, "Estimated energy consumption: {} Joules", result.energy_j)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonResult<'a> {
    command: &'a [String],
    command_line: &'a str,
    cpu_user_s: f64,
    cpu_kernel_s: f64,
    cpu_seconds: f64,
    wall_time_s: f64,
    model: ModelKind,
    power_w: f64,
    energy_j: f64,
    energy_kwh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
}

fn print_json<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    let json_result = JsonResult {
        command: result.command.args(),
        command_line: result.command.as_str(),
        cpu_user_s: result.times.user.as_secs_f64(),
        cpu_kernel_s: result.times.kernel.as_secs_f64(),
        cpu_seconds: result.cpu_seconds,
        wall_time_s: result.wall_seconds(),
        model: result.model,
        power_w: result.power_w,
        energy_j: result.energy_j,
        energy_kwh: result.energy_j / JOULES_PER_KWH,
        exit_code: result.exit_status.code(),
    };
    let rendered = serde_json::to_string_pretty(&json_result)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
