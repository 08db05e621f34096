// Configuration module
// Resolves the active shell and every filesystem path the tool touches

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::SetupError;

/// Name of the script directory under the user's home.
pub const SCRIPT_DIR_NAME: &str = ".savescript";

/// The shell that invoked us, inferred from the SHELL environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Zsh,
    Bash,
    Other,
}

impl Shell {
    /// Classify a SHELL value by substring, so `/usr/local/bin/zsh` and
    /// `zsh` both count as zsh.
    pub fn from_env_value(value: &str) -> Self {
        if value.contains("zsh") {
            Shell::Zsh
        } else if value.contains("bash") {
            Shell::Bash
        } else {
            Shell::Other
        }
    }

    /// Read SHELL from the environment, failing with a clear message when
    /// it is unset instead of crashing at first use.
    pub fn detect() -> Result<Self> {
        let value = std::env::var("SHELL").map_err(|_| SetupError::ShellUndetected)?;
        let shell = Self::from_env_value(&value);
        debug!(shell = ?shell, value = %value, "detected active shell");
        Ok(shell)
    }
}

/// Filesystem locations the workflow touches, computed once and threaded
/// through the components so tests can point them at temp directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Directory holding saved scripts (`~/.savescript`).
    pub script_dir: PathBuf,
    /// Shell history file the last command is read from.
    pub history_file: PathBuf,
    /// Shell startup file the PATH export is appended to.
    pub profile_file: PathBuf,
}

impl Paths {
    /// Resolve all paths under the real home directory.
    pub fn resolve(shell: Shell) -> Result<Self> {
        let home = dirs::home_dir().context("Cannot determine home directory")?;
        Ok(Self::under(&home, shell))
    }

    /// Compute all paths relative to an explicit home directory.
    ///
    /// Zsh keeps its history in `.zsh_history`; everything else is assumed
    /// to use `.bash_history`. The profile file falls back to the generic
    /// `.profile` for shells that are neither zsh nor bash.
    pub fn under(home: &Path, shell: Shell) -> Self {
        let history_file = match shell {
            Shell::Zsh => home.join(".zsh_history"),
            _ => home.join(".bash_history"),
        };
        let profile_file = match shell {
            Shell::Zsh => home.join(".zshrc"),
            Shell::Bash => home.join(".bashrc"),
            Shell::Other => home.join(".profile"),
        };
        let paths = Self {
            script_dir: home.join(SCRIPT_DIR_NAME),
            history_file,
            profile_file,
        };
        debug!(
            script_dir = %paths.script_dir.display(),
            history_file = %paths.history_file.display(),
            profile_file = %paths.profile_file.display(),
            "resolved paths"
        );
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_classification() {
        assert_eq!(Shell::from_env_value("/bin/zsh"), Shell::Zsh);
        assert_eq!(Shell::from_env_value("/usr/local/bin/zsh"), Shell::Zsh);
        assert_eq!(Shell::from_env_value("/bin/bash"), Shell::Bash);
        assert_eq!(Shell::from_env_value("/usr/bin/fish"), Shell::Other);
        assert_eq!(Shell::from_env_value(""), Shell::Other);
    }

    #[test]
    fn test_zsh_paths() {
        let paths = Paths::under(Path::new("/home/u"), Shell::Zsh);
        assert_eq!(paths.history_file, Path::new("/home/u/.zsh_history"));
        assert_eq!(paths.profile_file, Path::new("/home/u/.zshrc"));
        assert_eq!(paths.script_dir, Path::new("/home/u/.savescript"));
    }

    #[test]
    fn test_bash_paths() {
        let paths = Paths::under(Path::new("/home/u"), Shell::Bash);
        assert_eq!(paths.history_file, Path::new("/home/u/.bash_history"));
        assert_eq!(paths.profile_file, Path::new("/home/u/.bashrc"));
    }

    #[test]
    fn test_other_shell_falls_back_to_profile() {
        let paths = Paths::under(Path::new("/home/u"), Shell::Other);
        assert_eq!(paths.history_file, Path::new("/home/u/.bash_history"));
        assert_eq!(paths.profile_file, Path::new("/home/u/.profile"));
    }
}
