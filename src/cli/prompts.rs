//! Centralized warning and prompt messages for CLI output.

use super::quiet;
use crate::settings::Settings;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn length_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Warning: length {requested} is outside {}-{}, using {used}",
        Settings::MIN_LENGTH,
        Settings::MAX_LENGTH
    ));
}

pub fn count_raised() {
    warn("Warning: number of passwords must be at least 1, using 1");
}

pub fn seeded_source() {
    warn("Warning: seeded generator in use - these passwords are reproducible, not secret");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}
