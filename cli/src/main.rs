//! deed — local NFT ledger tool.
//!
//! Drives the ledger entry points against an LMDB-backed document store:
//! `init` seeds genesis state, `query` runs the read entry point, `exec`
//! runs the write entry point as a chosen caller. Results and rejection
//! payloads are printed as JSON on stdout.

use clap::Parser;
use deed_dispatch::{InvokeError, RequestEnvelope};
use deed_ledger::genesis::{self, LedgerConfig};
use deed_store_lmdb::LmdbDocumentStore;
use deed_types::{Address, CallContext, Timestamp};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deed", about = "NFT ledger tool")]
struct Cli {
    /// Data directory for ledger storage.
    #[arg(long, default_value = "./deed_data", env = "DEED_DATA_DIR")]
    data_dir: PathBuf,

    /// Path to a TOML configuration file with `minter` and `symbol`.
    /// If provided, file settings are used as the base; CLI flags and
    /// env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Genesis minter address (overrides the config file).
    #[arg(long, env = "DEED_MINTER")]
    minter: Option<String>,

    /// Token symbol prefixing minted ids (overrides the config file).
    #[arg(long, env = "DEED_SYMBOL")]
    symbol: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "DEED_LOG_LEVEL")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Seed genesis state: set the minter and empty every registry.
    /// Running it against a populated store wipes all existing state.
    Init,
    /// Run a read request: `deed query '{"method": "ownerOf", "params": {...}}'`.
    Query {
        /// Request envelope as JSON.
        request: String,
    },
    /// Run a write request as `--caller`.
    Exec {
        /// Account the request executes as.
        #[arg(long, env = "DEED_CALLER")]
        caller: String,
        /// Request envelope as JSON.
        request: String,
    },
}

fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(cli: &Cli) -> LedgerConfig {
    let file_config: Option<LedgerConfig> = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<LedgerConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using CLI defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let base = file_config.unwrap_or_default();
    LedgerConfig {
        minter: cli
            .minter
            .as_deref()
            .map(Address::new)
            .unwrap_or(base.minter),
        symbol: cli.symbol.clone().unwrap_or(base.symbol),
    }
}

/// Print an invocation failure. Business-rule rejections go to stdout as
/// the structured payload; everything else is reported through the error
/// return.
fn report_failure(err: InvokeError) -> anyhow::Result<()> {
    if let Some(rejection) = err.rejection() {
        println!("{}", serde_json::to_string_pretty(rejection)?);
        std::process::exit(1);
    }
    Err(err.into())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load_config(&cli);
    let store = LmdbDocumentStore::open(&cli.data_dir)?;

    match &cli.command {
        Command::Init => {
            genesis::init(&store, &config)?;
            println!("ledger initialized: minter={} symbol={}", config.minter, config.symbol);
        }
        Command::Query { request } => {
            let envelope = RequestEnvelope::from_json(request)?;
            match deed_dispatch::query(&store, &envelope) {
                Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                Err(err) => return report_failure(err),
            }
        }
        Command::Exec { caller, request } => {
            let envelope = RequestEnvelope::from_json(request)?;
            let ctx = CallContext::new(Address::new(caller.as_str()), Timestamp::now());
            match deed_dispatch::execute(&store, &ctx, &config.symbol, &envelope) {
                Ok(()) => tracing::info!(method = %envelope.method, "request applied"),
                Err(err) => return report_failure(err),
            }
        }
    }

    Ok(())
}
