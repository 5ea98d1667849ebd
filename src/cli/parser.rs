use crate::report::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for catdoor
/// Feed door sensor and camera events into the IN/OUT log
#[derive(Parser)]
#[command(
    name = "catdoor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Cat door log: turn door sensor messages and camera detections into an IN/OUT log and daily time-outside totals",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second door)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and data directories
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check configuration file for missing or unknown fields"
        )]
        check: bool,
    },

    /// Record a message from the door's remote sensor
    Remote {
        /// Message payload: IN or OUT (quotes and b'..' wrappers are accepted)
        payload: String,

        #[arg(long = "at", help = "Event time (YYYYMMDD-HHMMSS), default now")]
        at: Option<String>,
    },

    /// Record a camera detection by its bounding-box centre
    Detect {
        #[arg(long = "x", allow_hyphen_values = true, help = "Centre x in pixels")]
        x: f64,

        #[arg(long = "y", allow_hyphen_values = true, help = "Centre y in pixels")]
        y: f64,

        #[arg(long = "at", help = "Detection time (YYYYMMDD-HHMMSS), default now")]
        at: Option<String>,
    },

    /// Show the last logged event of the month
    Last {
        #[arg(long = "at", help = "Look at the month of this time (YYYYMMDD-HHMMSS)")]
        at: Option<String>,
    },

    /// Report time spent outside
    Report {
        #[arg(long, short, help = "Filter by year or month (YYYY or YYYY-MM)")]
        period: Option<String>,

        #[arg(long, help = "Show monthly averages instead of daily totals")]
        monthly: bool,

        #[arg(long, value_enum, default_value = "table", help = "Output format")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE", help = "Write to FILE instead of stdout")]
        file: Option<String>,
    },
}
