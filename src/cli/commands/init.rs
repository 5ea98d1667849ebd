use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - `<data_dir>/logs` and `<data_dir>/images`
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Logs       : {}", cfg.logs_dir().display());
    println!("🖼️  Images     : {}", cfg.images_dir().display());

    success("catdoor initialization completed!");
    Ok(())
}
