// Environment installer
//
// Ensures the script directory exists and the profile file exports it on
// PATH. Both operations are idempotent. Each run may queue at most one
// notice, rendered at normal termination so it is the last thing the user
// sees.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::config::Paths;

/// Deferred message shown once at exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The script directory was just created for the first time.
    FirstRun,
    /// The directory existed but is not on the current PATH, so the user
    /// has not reloaded their shell since the export was added.
    ReloadShell,
}

impl Notice {
    /// User-facing text. Both variants point at the profile file to source.
    pub fn render(&self, profile_file: &Path) -> String {
        match self {
            Notice::FirstRun => format!(
                "First time running savescript detected. Please type \"source {}\" or reload your shell.",
                profile_file.display()
            ),
            Notice::ReloadShell => format!(
                "Please type \"source {}\" or reload your shell.",
                profile_file.display()
            ),
        }
    }
}

/// Ensure the script directory exists and the profile exports it on PATH.
///
/// `path_value` is the invoking process's PATH value (None when unset).
/// Returns the notice to show at exit, if any.
pub fn ensure_environment(paths: &Paths, path_value: Option<&str>) -> Result<Option<Notice>> {
    let mut notice = None;

    if !paths.script_dir.exists() {
        fs::create_dir(&paths.script_dir).with_context(|| {
            format!(
                "Failed to create script directory: {}",
                paths.script_dir.display()
            )
        })?;
        info!(dir = %paths.script_dir.display(), "created script directory");
        notice = Some(Notice::FirstRun);
    }

    let dir = paths.script_dir.to_string_lossy();
    let on_path = path_value.map(|p| p.contains(&*dir)).unwrap_or(false);
    if !on_path {
        let export_line = format!("export PATH=$PATH:{}", dir);
        if append_if_absent(&paths.profile_file, &export_line)? {
            info!(file = %paths.profile_file.display(), "appended PATH export to profile");
        }
        // The export may already be in the profile from a previous run; the
        // user still needs a reload since the current PATH lacks the dir.
        if notice.is_none() {
            notice = Some(Notice::ReloadShell);
        }
    }

    Ok(notice)
}

/// Append `line` to `file` unless the file already contains it verbatim.
/// A missing profile file counts as not containing the line and is created.
/// Returns true when the line was appended.
fn append_if_absent(file: &Path, line: &str) -> Result<bool> {
    let existing = match fs::read_to_string(file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read profile file: {}", file.display())
            })
        }
    };

    if existing.contains(line) {
        return Ok(false);
    }

    let mut profile = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .with_context(|| format!("Failed to open profile file: {}", file.display()))?;
    profile
        .write_all(line.as_bytes())
        .with_context(|| format!("Failed to append to profile file: {}", file.display()))?;
    Ok(true)
}
