//! Terminal capability detection and utilities

use owo_colors::{OwoColorize, colors::css};

/// Widest separator the menus draw.
const MAX_RULE_WIDTH: usize = 41;

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Width used for record separators, clamped to the terminal width.
pub fn rule_width() -> usize {
    terminal_size::terminal_size()
        .map_or(MAX_RULE_WIDTH, |(w, _)| usize::from(w.0).min(MAX_RULE_WIDTH))
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }
}
