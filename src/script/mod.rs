// Script writer
//
// Persists the captured command as an executable file, with an interactive
// confirmation gate when the target name is already taken.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// Where overwrite answers come from.
///
/// Production reads the controlling terminal; tests supply scripted
/// answers instead of blocking on a real tty.
pub trait AnswerSource {
    /// Show the prompt and return one line of input without its newline.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on `/dev/tty` so the question reaches the user even when the
/// process's stdin or stdout is redirected (the piped-invocation case).
pub struct TtyAnswerSource;

impl AnswerSource for TtyAnswerSource {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let mut tty_out = fs::OpenOptions::new()
            .write(true)
            .open("/dev/tty")
            .context("Failed to open controlling terminal for writing")?;
        write!(tty_out, "{}", prompt).context("Failed to write prompt to terminal")?;
        tty_out
            .flush()
            .context("Failed to flush prompt to terminal")?;

        let tty_in =
            fs::File::open("/dev/tty").context("Failed to open controlling terminal for reading")?;
        let mut answer = String::new();
        BufReader::new(tty_in)
            .read_line(&mut answer)
            .context("Failed to read answer from terminal")?;
        Ok(answer.trim_end_matches('\n').to_string())
    }
}

/// Outcome of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    Declined,
}

/// Write `command` to `<script_dir>/<name>` with mode 755.
///
/// The name is used verbatim; collisions with an existing file are gated
/// by an interactive prompt that repeats until the answer is exactly "y"
/// or exactly "n". Declining skips the write and is not an error.
pub fn save_script(
    script_dir: &Path,
    name: &str,
    command: &str,
    answers: &mut dyn AnswerSource,
) -> Result<SaveOutcome> {
    let target = script_dir.join(name);

    if target.exists() {
        let prompt = format!("{} already exists. Overwrite? (yn) ", name);
        loop {
            match answers.ask(&prompt)?.as_str() {
                "y" => break,
                "n" => {
                    debug!(name, "overwrite declined");
                    return Ok(SaveOutcome::Declined);
                }
                _ => continue,
            }
        }
    }

    fs::write(&target, command)
        .with_context(|| format!("Failed to write script: {}", target.display()))?;
    set_executable(&target)?;
    info!(path = %target.display(), "saved script");
    Ok(SaveOutcome::Written)
}

/// chmod 755: readable and executable by everyone, writable by owner.
#[cfg(target_family = "unix")]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to set permissions on: {}", path.display()))
}

#[cfg(not(target_family = "unix"))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
