//! Single-slot launcher for the external batch programs
//!
//! At most one child process is tracked at a time; a spawn request while the
//! tracked child is alive is rejected, never queued. Exits are observed with
//! non-blocking polls from the UI loop, so completion feedback lands on the
//! thread that owns the window.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use thiserror::Error;
use tracing::{info, warn};

/// Why a spawn request produced no child process.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// The previous program is still running; the request is dropped.
    #[error("Ya hay un proceso en ejecucion. Por favor, espere a que termine o cierrelo.")]
    AlreadyRunning,

    /// The program is neither in the working directory nor on the search path.
    #[error("Error: No se encontro '{0}'. Asegurese de que este en la misma carpeta.")]
    NotFound(String),

    /// The OS refused to start the program for any other reason.
    #[error("Error al iniciar '{name}': {source}")]
    Launch {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Exit observed by [`Launcher::poll_exit`], reported exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessExit {
    pub name: String,
    pub code: Option<i32>,
}

struct RunningProcess {
    name: String,
    child: Child,
}

/// Owns the single process slot.
#[derive(Default)]
pub struct Launcher {
    current: Option<RunningProcess>,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the tracked program, if one is tracked.
    pub fn running_program(&self) -> Option<&str> {
        self.current.as_ref().map(|current| current.name.as_str())
    }

    /// Starts `program` with no arguments, inheriting the environment.
    ///
    /// Fails with [`SpawnError::AlreadyRunning`] while the previous child is
    /// alive, leaving that child untouched. On success the child is tracked
    /// until [`poll_exit`](Self::poll_exit) observes its exit; the call does
    /// not wait for it.
    pub fn spawn(&mut self, program: &str) -> Result<(), SpawnError> {
        if let Some(current) = self.current.as_mut() {
            match current.child.try_wait() {
                Ok(None) => return Err(SpawnError::AlreadyRunning),
                Ok(Some(status)) => {
                    info!(program = %current.name, exit = ?status.code(), "Previous program finished, slot is free");
                    self.current = None;
                }
                Err(err) => {
                    // Liveness unknown, keep the slot reserved
                    warn!(error = ?err, program = %current.name, "Failed to query child status");
                    return Err(SpawnError::AlreadyRunning);
                }
            }
        }

        let resolved = resolve_program(program);
        let child = Command::new(&resolved).spawn().map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                SpawnError::NotFound(program.to_string())
            } else {
                SpawnError::Launch {
                    name: program.to_string(),
                    source: err,
                }
            }
        })?;

        let pid = child.id();
        info!(program, pid, "Started program");
        self.current = Some(RunningProcess {
            name: program.to_string(),
            child,
        });
        Ok(())
    }

    /// Non-blocking exit check. Yields each exit exactly once and frees the
    /// slot; returns `None` while the child is still running.
    pub fn poll_exit(&mut self) -> Option<ProcessExit> {
        let current = self.current.as_mut()?;
        match current.child.try_wait() {
            Ok(Some(status)) => {
                info!(program = %current.name, exit = ?status.code(), "Program finished");
                let name = current.name.clone();
                self.current = None;
                Some(ProcessExit {
                    name,
                    code: status.code(),
                })
            }
            Ok(None) => None,
            Err(err) => {
                warn!(error = ?err, program = %current.name, "Failed to query child status");
                None
            }
        }
    }
}

fn resolve_program(program: &str) -> PathBuf {
    resolve_program_in(Path::new("."), program)
}

/// A bare program name that exists as a file in `dir` is run from there;
/// anything else is left to the OS search path.
fn resolve_program_in(dir: &Path, program: &str) -> PathBuf {
    let bare = !program.contains(['/', '\\']);
    let local = dir.join(program);
    if bare && local.is_file() {
        local
    } else {
        PathBuf::from(program)
    }
}
