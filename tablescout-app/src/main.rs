use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tablescout_core::config::Config;
use tablescout_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use tracing::info;

mod ui;

#[derive(Parser, Debug)]
#[command(name = "tablescout")]
#[command(author, version, about = "Restaurant browsing with local accounts", long_about = None)]
struct Args {
    /// Display language (overrides TABLESCOUT_LANGUAGE)
    #[arg(short, long)]
    language: Option<String>,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,

    /// Directory holding the credential file (overrides TABLESCOUT_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level: LogLevel = args.log_level.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', using 'warn'", args.log_level);
        LogLevel::Warn
    });
    init_logging_with_config(LogConfig::new(log_level).json_format(args.json_logs))?;

    let mut config = Config::from_env()?;
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(data_dir) = args.data_dir {
        config.storage.data_dir = data_dir;
    }

    info!(
        language = %config.language,
        data_dir = %config.storage.data_dir.display(),
        "tablescout starting"
    );

    ui::run(config)
}
