/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

use crate::models::Location;

/// IN in green, OUT in yellow.
pub fn colorize_location(location: Location) -> String {
    let color = match location {
        Location::In => GREEN,
        Location::Out => YELLOW,
    };
    format!("{color}{location}{RESET}")
}

/// Zero totals are greyed out.
pub fn colorize_minutes(value: &str, minutes: i64) -> String {
    if minutes == 0 {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
