/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Terminal colour for a map marker colour name.
/// Orange has no basic ANSI code, yellow stands in for it.
pub fn ansi_for_marker(marker: &str) -> &'static str {
    match marker {
        "green" => GREEN,
        "orange" => YELLOW,
        "red" => RED,
        _ => RESET,
    }
}

/// Paint `value` grey when empty (shown as "--").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
