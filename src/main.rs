//! nihongo-feed - HTTP server for the Japanese learning feed

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use nihongo_feed::{config::Args, logging, server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(&args.log_level, args.log_json);

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  nihongo-feed");
    info!("======================================");
    info!("Listen: {}", args.listen);
    info!(
        "MongoDB: {} (database '{}', collection '{}')",
        if args.mongodb_uri.is_some() { "configured" } else { "NOT SET" },
        args.mongodb_db,
        args.collection
    );
    info!("Store timeout: {}ms", args.store_timeout_ms);
    info!(
        "Targets: daily-life {}, food {}, casual {}, sumo {}",
        args.daily_count, args.food_count, args.casual_count, args.sumo_count
    );
    info!("======================================");

    let state = Arc::new(AppState::new(args));
    server::run(state).await?;

    Ok(())
}
