//! nfl-stadiums CLI
//!
//! Local lookup entry point backed by the flat-file cache.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nfl_stadiums::{
    config::Config,
    error::Result,
    services::{StadiumService, TeamStadiums},
};

/// NFL stadium lookup backed by Wikipedia
#[derive(Parser, Debug)]
#[command(name = "nfl-stadiums", version, about = "NFL stadium lookup backed by Wikipedia")]
struct Cli {
    /// Path to an optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ignore the flat-file cache and fetch fresh data
    #[arg(long)]
    no_cache: bool,

    /// Directory holding the cache artifacts
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every stadium name in table order
    Names,

    /// Show the stadium record(s) for a team (any alias form)
    Team {
        /// Team query, e.g. "DET", "Lions" or "Detroit Lions"
        query: String,
    },

    /// Force a fresh fetch and rewrite the cache
    Refresh,

    /// Validate the effective configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    if cli.no_cache {
        config.use_cache = false;
    }
    if let Some(dir) = cli.cache_dir {
        config.cache_dir = dir;
    }
    config.verbose = config.verbose || cli.verbose;
    init_logging(config.verbose);

    match cli.command {
        Command::Names => {
            let service = StadiumService::new(config)?;
            for name in service.stadium_names() {
                println!("{name}");
            }
        }

        Command::Team { query } => {
            let service = StadiumService::new(config)?;
            match service.find_by_team(&query)? {
                TeamStadiums::Single(stadium) => {
                    println!("{}", serde_json::to_string_pretty(&stadium)?);
                }
                TeamStadiums::Shared(stadiums) => {
                    println!("{}", serde_json::to_string_pretty(&stadiums)?);
                }
            }
        }

        Command::Refresh => {
            config.use_cache = false;
            let service = StadiumService::new(config)?;
            log::info!("Cached {} stadiums", service.records().len());
        }

        Command::Validate => {
            config.validate()?;
            log::info!("Config OK");
        }
    }

    Ok(())
}
