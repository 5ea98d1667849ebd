use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Engine;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_location;
use crate::utils::time::{
    format_timestamp, now, parse_optional_timestamp, rounded_minutes_between,
};

/// Print the last logged event for the month of `--at`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Last { at } = cmd {
        let timestamp = parse_optional_timestamp(at.as_ref())?.unwrap_or_else(now);

        let engine = Engine::from_config(cfg);
        let prior = engine.prior_state(timestamp)?;

        if prior.sentinel {
            info(format!(
                "No events logged for {}; {} is assumed {}.",
                timestamp.format("%Y-%m"),
                engine.settings().subject_name,
                colorize_location(prior.location)
            ));
        } else {
            println!(
                "{} {} since {} ({} min)",
                engine.settings().subject_name,
                colorize_location(prior.location),
                format_timestamp(&prior.timestamp),
                rounded_minutes_between(prior.timestamp, timestamp)
            );
        }
    }

    Ok(())
}
