use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Engine;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time::{now, parse_optional_timestamp};

/// Feed a camera detection through the engine.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Detect { x, y, at } = cmd {
        let timestamp = parse_optional_timestamp(at.as_ref())?.unwrap_or_else(now);

        let engine = Engine::from_config(cfg);
        let decision = engine.handle_detection(timestamp, *x, *y)?;

        messages::decision(&decision);
    }

    Ok(())
}
