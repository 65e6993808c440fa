//! Styled terminal output. Styling degrades to plain text when stdout is
//! not a terminal, so CI logs stay grep-friendly.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a debug line, dimmed, on stderr.
pub fn display_debug(message: &str) {
    eprintln!("{} {}", style("DEBUG:").dim(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print one result entry as `KEY: value`.
pub fn display_output(key: &str, value: &str) {
    println!("{} {}", style(format!("{}:", key)).bold(), value);
}
