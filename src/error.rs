use std::io::{self, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnergyError {
    #[error("No program to run was given.")]
    Usage,

    #[error("Failed to create the process.")]
    ProcessCreation { code: i32 },

    #[error("Failed to wait for the process.")]
    Wait { code: i32 },

    #[error("Failed to query the process times.")]
    TimesQuery { code: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl EnergyError {
    /// OS error code carried by errors raised from a failed system call.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            EnergyError::ProcessCreation { code }
            | EnergyError::Wait { code }
            | EnergyError::TimesQuery { code } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnergyError>;

/// Writes a diagnostic for `err` to `out`.
///
/// OS failures are rendered as `<context> Error <code>: <description>` with the
/// description looked up from the OS. Write failures are swallowed: there is
/// nowhere left to report them.
pub fn report<W: Write>(out: &mut W, err: &EnergyError) {
    let _ = match err.os_code() {
        Some(code) => writeln!(out, "{err} Error {code}: {}", os_error_description(code)),
        None => writeln!(out, "error: {err}"),
    };
    let _ = out.flush();
}

#[cfg(unix)]
fn os_error_description(code: i32) -> &'static str {
    nix::errno::Errno::from_raw(code).desc()
}

#[cfg(not(unix))]
fn os_error_description(code: i32) -> String {
    io::Error::from_raw_os_error(code).to_string()
}
