use std::os::unix::process::ExitStatusExt;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, SystemTime};

use nix::errno::Errno;
use nix::sys::wait::{Id, WaitPidFlag, waitid};
use nix::unistd::Pid;
use tracing::{debug, warn};

use crate::cmdline::CommandLine;
use crate::error::{EnergyError, Result};
use crate::times::{ProcessTimes, Ticks};

/// Owns a launched child until it has been reaped.
///
/// The child's process-table entry is released exactly once: by
/// [`ProcessGuard::query_times`] when accounting is read, or on drop for any
/// path that never got that far.
pub struct ProcessGuard {
    child: Child,
    created_at: SystemTime,
    exited_at: Option<SystemTime>,
    reaped: bool,
}

/// Spawns `cmd` with inherited standard streams.
pub fn launch(cmd: &CommandLine) -> Result<ProcessGuard> {
    let mut command = Command::new(cmd.program());
    command.args(cmd.arguments());
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let created_at = SystemTime::now();
    let child = command.spawn().map_err(|err| {
        debug!(program = cmd.program(), %err, "spawn failed");
        EnergyError::ProcessCreation {
            code: err.raw_os_error().unwrap_or(libc::EINVAL),
        }
    })?;
    debug!(pid = child.id(), command = %cmd, "process created");

    Ok(ProcessGuard {
        child,
        created_at,
        exited_at: None,
        reaped: false,
    })
}

impl ProcessGuard {
    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    fn raw_pid(&self) -> libc::pid_t {
        self.child.id() as libc::pid_t
    }

    /// Blocks until the child terminates, leaving it unreaped.
    pub fn wait_for_exit(&mut self) -> Result<()> {
        waitid(
            Id::Pid(Pid::from_raw(self.raw_pid())),
            WaitPidFlag::WEXITED | WaitPidFlag::WNOWAIT,
        )
        .map_err(|errno| EnergyError::Wait { code: errno as i32 })?;

        let exited_at = SystemTime::now();
        if let Ok(elapsed) = exited_at.duration_since(self.created_at) {
            debug!(
                pid = self.pid(),
                elapsed = %humantime::format_duration(elapsed),
                "process exited"
            );
        }
        self.exited_at = Some(exited_at);
        Ok(())
    }

    /// Reaps the exited child and returns its accounting and exit status.
    ///
    /// Fails with `EAGAIN` if the child is still running.
    pub fn query_times(&mut self) -> Result<(ProcessTimes, ExitStatus)> {
        let mut status: libc::c_int = 0;
        // SAFETY: rusage is a plain C struct; all-zero is a valid value.
        let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
        // SAFETY: `status` and `usage` are valid, writable locals for the call.
        let rc = unsafe { libc::wait4(self.raw_pid(), &mut status, libc::WNOHANG, &mut usage) };
        match rc {
            -1 => {
                return Err(EnergyError::TimesQuery {
                    code: Errno::last() as i32,
                });
            }
            0 => return Err(EnergyError::TimesQuery { code: libc::EAGAIN }),
            _ => self.reaped = true,
        }

        let exited_at = *self.exited_at.get_or_insert_with(SystemTime::now);
        let times = ProcessTimes {
            creation: Ticks::since_epoch(self.created_at),
            exit: Ticks::since_epoch(exited_at),
            kernel: timeval_ticks(usage.ru_stime),
            user: timeval_ticks(usage.ru_utime),
        };
        Ok((times, ExitStatus::from_raw(status)))
    }
}

impl Drop for ProcessGuard {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        // Blocks if the child is still running.
        if let Err(err) = self.child.wait() {
            warn!(pid = self.pid(), %err, "failed to reap child");
        }
        self.reaped = true;
    }
}

fn timeval_ticks(time: libc::timeval) -> Ticks {
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_possible_truncation)]
    let duration = Duration::new(time.tv_sec as u64, time.tv_usec as u32 * 1000);
    Ticks::from_duration(duration)
}
