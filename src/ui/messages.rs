use crate::core::{Decision, Outcome};
use crate::utils::colors::colorize_location;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_SKIP: &str = "💤";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Summarize what the engine did with one observation.
pub fn decision(d: &Decision) {
    let prior = if d.prior.sentinel {
        "no earlier event this month".to_string()
    } else {
        format!(
            "last {} {} min ago",
            colorize_location(d.prior.location),
            d.interval_minutes
        )
    };

    match &d.outcome {
        Outcome::Suppressed => {
            println!(
                "{} Seen {} ({}): no change, nothing logged",
                ICON_SKIP,
                colorize_location(d.observed),
                prior
            );
        }
        Outcome::Recorded {
            event,
            aggregate,
            evidence,
        } => {
            success(format!(
                "Seen {} ({}): logged {}",
                colorize_location(d.observed),
                prior,
                event.to_line()
            ));
            if let Some(row) = aggregate {
                info(format!(
                    "Time outside on {}: {} min",
                    row.date_key(),
                    row.minutes_outside
                ));
            }
            if let Some(path) = evidence {
                info(format!("Evidence: {}", path.display()));
            }
        }
    }
}
