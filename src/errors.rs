// Error taxonomy
//
// The tool only has two errors that abort a run before any file is
// touched; everything else is a fatal I/O failure propagated with
// anyhow context.

use thiserror::Error;

/// Startup errors surfaced directly to the user.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The name argument was not supplied.
    #[error("Invalid syntax. Usage: savescript <filename>")]
    Usage,

    /// The SHELL environment variable is unset, so neither the history
    /// file nor the profile file can be located.
    #[error("Cannot determine active shell: SHELL environment variable is not set")]
    ShellUndetected,
}
