//! nihongo-populate - one-shot reseed of the posts collection
//!
//! Usage:
//!   nihongo-populate --mongodb-uri mongodb://localhost:27017
//!   nihongo-populate --curated
//!
//! Takes the same flags and environment variables as the server. Prints the
//! report as JSON and exits 0, or logs the failure and exits 1.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use nihongo_feed::{
    config::Args,
    db::{MongoConnector, StoreConnector},
    logging,
    reseed::{reseed, ReseedReport, SeedPlan},
};

#[derive(Parser, Debug)]
#[command(name = "nihongo-populate")]
#[command(about = "Wipe and reseed the posts collection")]
#[command(version)]
struct PopulateArgs {
    /// Insert the curated post set instead of synthesizing from the catalog
    #[arg(long)]
    curated: bool,

    #[command(flatten)]
    feed: Args,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let args = PopulateArgs::parse();
    logging::init(&args.feed.log_level, args.feed.log_json);

    if let Err(e) = args.feed.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let plan = if args.curated {
        SeedPlan::Curated
    } else {
        args.feed.seed_plan()
    };

    match populate(&args.feed, &plan).await {
        Ok(report) => {
            info!(plan = plan.name(), "Populate finished");
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize report: {}", e),
            }
        }
        Err(e) => {
            error!(plan = plan.name(), "Populate failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn populate(args: &Args, plan: &SeedPlan) -> anyhow::Result<ReseedReport> {
    let connector = MongoConnector::new(
        args.mongodb_uri.clone(),
        &args.mongodb_db,
        &args.collection,
        args.store_timeout(),
    );
    let catalog = args.catalog();
    let mut rng = match args.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let store = connector.connect().await?;
    let result = reseed(&*store, &catalog, plan, &mut rng).await;
    store.close().await;
    Ok(result?)
}
