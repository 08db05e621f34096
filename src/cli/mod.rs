// CLI module
// Argument parsing and colored terminal messages

use clap::Parser;

/// Save the previous shell command as a named executable script.
#[derive(Debug, Parser)]
#[command(
    name = "savescript",
    version,
    about = "Save your last shell command as a reusable script"
)]
pub struct Cli {
    /// Name to save the captured command under
    pub name: String,
}

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Print an error message in red on stdout.
pub fn print_error(message: &str) {
    println!("{}{}{}", RED, message, RESET);
}

/// Print an informational notice in yellow on stdout.
pub fn print_notice(message: &str) {
    println!("{}{}{}", YELLOW, message, RESET);
}
