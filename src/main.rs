use anyhow::Result;
use clap::Parser;
use school_planner::{config::Config, logger::Logger, ui};
use std::path::PathBuf;

/// A terminal planner for subjects, events, grades and attendance
#[derive(Parser, Debug)]
#[command(name = "school-planner", version, about)]
struct Args {
    /// Load configuration from this file instead of the default locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = match args.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.log(format!("School Planner {} starting", env!("CARGO_PKG_VERSION")));

    ui::run_app(config, logger).await?;

    Ok(())
}
