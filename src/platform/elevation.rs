// Privileged command execution through a superuser shell
use parking_lot::Mutex;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::process::{Child, Command, ExitStatus, Stdio};

/// Elevation helper spawned when nothing else is configured
pub const DEFAULT_SU_BINARY: &str = "su";

/// Exit status the elevation helper reports when the superuser request is refused
pub const DENIED_EXIT_CODE: i32 = 255;

// One elevated session at a time per process. Two sessions writing
// different governors to the same cores have no defined winner.
static SESSION_LOCK: Mutex<()> = parking_lot::const_mutex(());

#[cfg(unix)]
pub fn is_elevated() -> bool {
    // On Unix, check if running as root
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_elevated() -> bool {
    false
}

/// Runs shell commands with elevated privileges.
///
/// Implementations fold every failure (spawn, stream, wait, refused
/// elevation) into `false`. Callers only learn whether the batch went through.
pub trait CommandExecutor {
    /// Executes all commands inside a single elevated session.
    fn execute_batch(&self, commands: &[String]) -> bool;

    /// Executes one command in its own elevated session.
    ///
    /// Each call requests elevation again, so prefer `execute_batch` when
    /// several commands need to run back to back.
    fn execute_single(&self, command: &str) -> bool {
        if command.is_empty() {
            return false;
        }
        self.execute_batch(&[command.to_string()])
    }
}

/// Executes commands by piping them into a `su` process
#[derive(Debug, Clone)]
pub struct SuExecutor {
    program: OsString,
    denied_exit_code: i32,
}

impl Default for SuExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SuExecutor {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_SU_BINARY)
    }

    /// Use another elevation helper, e.g. an absolute path to `su`
    pub fn with_program<S: Into<OsString>>(program: S) -> Self {
        Self {
            program: program.into(),
            denied_exit_code: DENIED_EXIT_CODE,
        }
    }

    /// Override the exit status treated as "elevation refused"
    pub fn denied_exit_code(mut self, code: i32) -> Self {
        self.denied_exit_code = code;
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn get_denied_exit_code(&self) -> i32 {
        self.denied_exit_code
    }

    /// Spawns the helper, streams the batch and waits for it to exit.
    ///
    /// The child is reaped on every path and its stdin is closed before
    /// waiting, so nothing outlives the call.
    fn run_session(&self, commands: &[String]) -> io::Result<ExitStatus> {
        let _session = SESSION_LOCK.lock();

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .spawn()?;

        let write_result = match child.stdin.take() {
            Some(mut stdin) => write_commands(&mut stdin, commands),
            None => Err(io::Error::other("stdin of elevated shell was not captured")),
        };

        if let Err(e) = write_result {
            abandon(&mut child);
            return Err(e);
        }

        child.wait()
    }
}

impl CommandExecutor for SuExecutor {
    fn execute_batch(&self, commands: &[String]) -> bool {
        if commands.is_empty() {
            log::debug!("Empty command batch, not requesting elevation");
            return false;
        }

        match self.run_session(commands) {
            Ok(status) => {
                let granted = is_granted(status.code(), self.denied_exit_code);
                if granted {
                    log::info!(
                        "Elevated session finished with {} ({} command(s))",
                        status,
                        commands.len()
                    );
                } else {
                    log::warn!("Root access denied ({})", status);
                }
                granted
            }
            Err(e) => {
                log::warn!(
                    "Can't get root access through {:?}: {}",
                    self.program,
                    e
                );
                false
            }
        }
    }
}

/// Maps the helper's exit code to a verdict.
///
/// Only the denied sentinel counts as failure. Nonzero codes from individual
/// commands are invisible here. A process killed by a signal has no code and
/// is treated as a failure.
pub fn is_granted(exit_code: Option<i32>, denied_exit_code: i32) -> bool {
    match exit_code {
        Some(code) => code != denied_exit_code,
        None => false,
    }
}

/// Writes each command on its own line, then `exit`, flushing after each line
pub fn write_commands<W: Write>(writer: &mut W, commands: &[String]) -> io::Result<()> {
    for command in commands {
        writer.write_all(command.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        log::debug!("Queued: {}", command);
    }

    writer.write_all(b"exit\n")?;
    writer.flush()
}

fn abandon(child: &mut Child) {
    if let Err(e) = child.kill() {
        log::debug!("Elevated shell already gone: {}", e);
    }
    if let Err(e) = child.wait() {
        log::warn!("Failed to reap elevated shell: {}", e);
    }
}
