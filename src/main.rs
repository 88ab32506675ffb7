use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imposter::bridge;
use imposter::config::Config;
use imposter::random::{Randomness, SystemRandomness};
use imposter::setup_store::SetupStore;
use imposter::state::AppState;
use imposter::storage::FileStore;

/// Serves the JSON-lines bridge on stdin/stdout. Logs go to stderr.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imposter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!("Starting imposter with data dir {}", config.data_dir.display());

    let store = FileStore::open(&config.data_dir)?;
    let rng: Box<dyn Randomness> = match config.rng_seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            Box::new(SystemRandomness::seeded(seed))
        }
        None => Box::new(SystemRandomness::new()),
    };
    let state = Arc::new(AppState::new(
        SetupStore::with_key(Box::new(store), config.storage_key),
        rng,
    ));

    let stdin = BufReader::new(tokio::io::stdin());
    bridge::run(stdin, tokio::io::stdout(), &state).await?;

    tracing::info!("Input closed, shutting down");
    Ok(())
}
