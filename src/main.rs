use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use match_analyzer::config::AppConfig;
use match_analyzer::{trailing_window, ChampionCatalog, MatchAnalyzer, MatchList, MatchRecord};

#[derive(Parser)]
#[command(name = "match-analyzer")]
#[command(about = "Team-relative performance and LP scoring for ARAM matches")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a match record
    Analyze {
        /// Match JSON file
        #[arg(long = "match")]
        match_path: PathBuf,

        /// Only print the persisted entry for this account
        #[arg(long)]
        account_id: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Select the most recent matches from a match list
    Window {
        /// Match-list JSON file
        #[arg(long)]
        matchlist: PathBuf,

        /// Number of trailing matches to keep
        #[arg(long, allow_negative_numbers = true)]
        amount: i64,
    },

    /// Resolve a champion id to its name
    Champion {
        id: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

    // Initialize tracing
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting match-analyzer v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Analyze {
            match_path,
            account_id,
            pretty,
        } => {
            let catalog = load_catalog(&config)?;
            let record: MatchRecord = read_json(&match_path)?;

            let analyzer =
                MatchAnalyzer::new(&catalog).with_team_size(config.roster.expected_team_size);
            let analysis = analyzer
                .analyze(&record)
                .with_context(|| format!("Failed to analyze match {}", record.game_id))?;

            match account_id {
                Some(account_id) => {
                    let player = analysis.player(&account_id).with_context(|| {
                        format!("Account {} did not play match {}", account_id, record.game_id)
                    })?;
                    tracing::info!(
                        "Analyzed match: {} played {} and gained {} LP.",
                        player.record.summoner_name,
                        player.record.champion,
                        player.lp_gain
                    );

                    let entry = analysis.player_match_entry(&account_id).with_context(|| {
                        format!("No entry for account {} in match {}", account_id, record.game_id)
                    })?;
                    print_json(&entry, pretty)?;
                }
                None => print_json(&analysis, pretty)?,
            }
        }

        Commands::Window { matchlist, amount } => {
            let list: MatchList = read_json(&matchlist)?;
            let window = trailing_window(&list.matches, amount);

            tracing::info!(
                "Selected {} of {} matches",
                window.len(),
                list.matches.len()
            );
            print_json(&window, false)?;
        }

        Commands::Champion { id } => {
            let catalog = load_catalog(&config)?;
            println!("{}", catalog.lookup(id));
        }
    }

    Ok(())
}

fn load_catalog(config: &AppConfig) -> Result<ChampionCatalog> {
    ChampionCatalog::from_file(&config.champions_path).with_context(|| {
        format!(
            "Failed to load champion data from {:?}",
            config.champions_path
        )
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {:?}", path))
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
