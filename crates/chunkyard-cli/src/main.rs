// crates/chunkyard-cli/src/main.rs
//
// CLI entrypoint for Chunkyard.
//
// Loads configuration, initializes tracing, resolves the ordered list of
// stores to route through, and dispatches to a subcommand.

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::Routing;
use config::CliConfig;

/// Chunkyard: read content-addressed chunks from a prioritized set of stores.
#[derive(Parser, Debug)]
#[command(
    name = "chunkyard",
    version = "0.1.0",
    about = "Read content-addressed chunks through an ordered list of stores"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Store location to read from (path, http(s) URL, or "memory").
    /// Repeat in priority order; replaces the configured list.
    #[arg(long = "store", global = true)]
    stores: Vec<String>,

    /// Writable location caching chunks read from the stores.
    #[arg(long, global = true)]
    cache: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Write a chunk's content to stdout or a file.
    Cat {
        /// Chunk id (64 hex characters).
        id: String,
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print whether any store holds a chunk.
    Has {
        /// Chunk id (64 hex characters).
        id: String,
    },

    /// Store a file as a single chunk and print its id.
    Put {
        /// File to store.
        file: PathBuf,
        /// Writable store location to put the chunk in.
        #[arg(long)]
        to: String,
    },

    /// List the stores lookups are routed through.
    Stores {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let loaded = CliConfig::load(&config_path);
    let log_level = loaded
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize tracing subscriber for structured logging. RUST_LOG wins
    // over the configured level. Logs go to stderr so `cat` output stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    let config = match loaded {
        Ok(cfg) => {
            tracing::debug!("Loaded configuration from {}", config_path);
            cfg
        }
        Err(e) => {
            if cli.config.is_some() {
                tracing::warn!(
                    "Could not load config from {}: {}. Using defaults.",
                    config_path,
                    e
                );
            }
            CliConfig::default()
        }
    };

    // --store flags replace the configured list; --cache overrides the configured cache.
    let locations = if cli.stores.is_empty() {
        &config.stores
    } else {
        &cli.stores
    };
    let cache = cli.cache.as_deref().or(config.cache.as_deref());
    let routing = Routing::parse(locations, cache)?;

    match &cli.command {
        Commands::Cat { id, out } => commands::cat::run(&routing, id, out.as_deref()).await?,
        Commands::Has { id } => commands::has::run(&routing, id).await?,
        Commands::Put { file, to } => commands::put::run(file, to).await?,
        Commands::Stores { json } => commands::stores::run(&routing, *json).await?,
    }

    Ok(())
}
