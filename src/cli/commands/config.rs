use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::check_keys;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config || !*check {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                info(format!(
                    "No configuration file at {}; defaults are in use.",
                    path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            let report = check_keys(&content)?;

            for key in &report.missing {
                warning(format!("Missing field '{}' (default applies)", key));
            }
            for key in &report.unknown {
                warning(format!("Unknown field '{}' is ignored", key));
            }

            // Reaching this point means the loaded config already validated.
            if report.is_clean() {
                success(format!("Configuration {} is complete.", path.display()));
            }
        }
    }

    Ok(())
}
