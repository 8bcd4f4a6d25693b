// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jotd: HTTP service for capturing short notes.
//!
//! Stores jots in a single SQLite file and serves them over plain HTTP.
//!
//! Usage:
//!   jotd [--bind <addr>] [--db <path>] [--verbose]

mod error;
mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jot_core::{Bootstrap, Store};

use state::AppState;

/// jotd: personal note-capture service
///
/// The defaults are the service's fixed surface: port 8080 on all interfaces
/// and `jot.db` in the working directory. Flags only override them.
#[derive(Parser, Debug)]
#[command(name = "jotd")]
#[command(about = "HTTP service for capturing short notes")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Path to the SQLite store file
    #[arg(long, default_value = jot_core::store::DEFAULT_PATH)]
    db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Runtime configuration assembled from the command line.
#[derive(Debug, Clone)]
struct Config {
    bind: SocketAddr,
    db_path: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            bind: args.bind,
            db_path: args.db,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(args.verbose);
    let config = Config::from(args);

    info!("Starting jotd");
    info!("  Bind address: {}", config.bind);
    info!("  Store: {}", config.db_path.display());

    let store = Store::new(config.db_path);
    match store.bootstrap() {
        Ok(Bootstrap::Created) => {
            info!("Database file created: {}", store.path().display())
        }
        Ok(Bootstrap::Existing) => {}
        Err(e) => {
            error!("failed to prepare store {}: {}", store.path().display(), e);
            return Err(e.into());
        }
    }

    server::run(config.bind, AppState::new(store)).await
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
