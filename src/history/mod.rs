// Command capture
//
// Extracts the command that preceded the savescript invocation from the
// shell's history file. The invocation itself is normally the last
// complete line, so the command to save is the one before it — unless the
// tool was invoked in a pipeline, in which case both live on the same line.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name this tool appears under in history lines.
const TOOL_NAME: &str = "savescript";

/// Byte length of the zsh extended-history marker `: 1234567890:0;`.
///
/// Fragile constant: assumes a ten-digit epoch timestamp and a
/// single-digit duration field, which holds for default zsh
/// EXTENDED_HISTORY output until the year 2286.
const TIMESTAMP_PREFIX_LEN: usize = 15;

/// Read the history file and return the captured command text.
pub fn capture_last_command(history_file: &Path) -> Result<String> {
    let contents = fs::read_to_string(history_file).with_context(|| {
        format!("Failed to read history file: {}", history_file.display())
    })?;
    let captured = select_command(&contents);
    debug!(captured = %captured, "captured command from history");
    Ok(captured)
}

/// Apply the selection rule to raw history text.
///
/// The second-to-last line (the last line is usually empty, history files
/// end with a newline) is the savescript invocation. If it mentions the
/// tool and contains a pipe, the real command is the text before the first
/// pipe (`echo hello | savescript foo`). Otherwise the real command is the
/// third-to-last line.
fn select_command(contents: &str) -> String {
    let lines: Vec<&str> = contents.split('\n').collect();
    let invoking = line_from_end(&lines, 2);

    let captured = if invoking.contains(TOOL_NAME) && invoking.contains('|') {
        invoking.split('|').next().unwrap_or("")
    } else {
        line_from_end(&lines, 3)
    };

    strip_timestamp(captured).to_string()
}

/// The nth line counting from the end (1 = last line). Histories shorter
/// than n lines yield an empty string rather than a panic.
fn line_from_end<'a>(lines: &[&'a str], n: usize) -> &'a str {
    lines
        .len()
        .checked_sub(n)
        .and_then(|i| lines.get(i))
        .copied()
        .unwrap_or("")
}

/// Strip the fixed-width extended-history marker from a zsh history line.
fn strip_timestamp(line: &str) -> &str {
    if line.starts_with(':') {
        line.get(TIMESTAMP_PREFIX_LEN..).unwrap_or("")
    } else {
        line
    }
}
