//! Terminal output utilities.
//!
//! Box drawing and the strength meter.

use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

use crate::pass::StrengthResult;

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset colors and show the cursor.
pub fn reset_terminal() {
    print!("\x1b[0m\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let padding = INNER_WIDTH - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

fn level_color(result: &StrengthResult) -> Color {
    let (r, g, b) = result.level.rgb();
    Color::Rgb { r, g, b }
}

/// Bar of `width` cells, `score`% filled in the level color.
pub fn strength_bar(result: &StrengthResult, width: usize) -> String {
    let filled = (result.score as usize * width) / 100;
    let color = level_color(result);
    format!(
        "{}{}",
        "█".repeat(filled).with(color),
        "░".repeat(width - filled).dark_grey()
    )
}

/// Label line: `Strength: Good (75/100)`, with a marker for weak passwords.
pub fn strength_label(result: &StrengthResult) -> String {
    let marker = if result.is_weak() { " ⚠" } else { "" };
    format!(
        "Strength: {} ({}/100){}",
        result.label().with(level_color(result)).bold(),
        result.score,
        marker
    )
}

/// Print the strength label and meter as box lines.
pub fn strength_lines(result: &StrengthResult) {
    box_line(&strength_label(result));
    box_line(&strength_bar(result, INNER_WIDTH));
}

/// Print a generated password with its strength.
pub fn show_password(password: &str, result: &StrengthResult) {
    box_top("Password");
    box_line(password);
    print_rule();
    strength_lines(result);
    box_bottom();
}

/// Print the strength and policy outcome of a checked password.
pub fn show_check(result: &StrengthResult, passes: bool) {
    box_top("Check");
    strength_lines(result);
    print_rule();
    let verdict = if passes {
        "meets policy".green()
    } else {
        "fails policy".red()
    };
    box_line(&format!("Policy: {}", verdict));
    box_bottom();
}
