use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Engine;
use crate::errors::{AppError, AppResult};
use crate::models::Location;
use crate::ui::messages;
use crate::utils::time::{now, parse_optional_timestamp};

/// Feed a remote sensor message through the engine.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remote { payload, at } = cmd {
        //
        // 1. Validate payload; anything but IN/OUT is dropped before touching the log
        //
        let location = Location::from_payload(payload)
            .ok_or_else(|| AppError::InvalidLocation(payload.to_string()))?;

        //
        // 2. Resolve time
        //
        let timestamp = parse_optional_timestamp(at.as_ref())?.unwrap_or_else(now);

        //
        // 3. Run the engine
        //
        let engine = Engine::from_config(cfg);
        let decision = engine.handle_remote(timestamp, location)?;

        messages::decision(&decision);
    }

    Ok(())
}
