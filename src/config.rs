//! Configuration for nihongo-feed
//!
//! CLI arguments and environment variable handling using clap. Every flag can
//! also be set through the environment (a `.env` file is loaded first).

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

use crate::content::{Catalog, CatalogOptions, Category, POST_COLLECTION};
use crate::reseed::{SeedPlan, TargetCounts};

/// nihongo-feed - frequency-ranked Japanese learning posts
#[derive(Parser, Debug, Clone)]
#[command(name = "nihongo-feed")]
#[command(about = "Serves and reseeds frequency-ranked Japanese learning posts")]
pub struct Args {
    /// MongoDB connection URI
    ///
    /// Optional at startup so the connection test can report its absence;
    /// every store operation fails with a configuration error without it.
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: Option<String>,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "nihongo-social")]
    pub mongodb_db: String,

    /// Posts collection name
    #[arg(long, env = "POSTS_COLLECTION", default_value = POST_COLLECTION)]
    pub collection: String,

    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8888")]
    pub listen: SocketAddr,

    /// Server selection, connect and per-operation timeout in milliseconds
    #[arg(long, env = "STORE_TIMEOUT_MS", default_value = "5000")]
    pub store_timeout_ms: u64,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit JSON log lines
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Fixed RNG seed for presentation hints and shuffling
    #[arg(long, env = "RNG_SEED")]
    pub rng_seed: Option<u64>,

    /// Daily-life posts to synthesize
    #[arg(long, env = "DAILY_COUNT", default_value = "50")]
    pub daily_count: usize,

    /// Food posts to synthesize
    #[arg(long, env = "FOOD_COUNT", default_value = "30")]
    pub food_count: usize,

    /// Casual posts to synthesize
    #[arg(long, env = "CASUAL_COUNT", default_value = "20")]
    pub casual_count: usize,

    /// Sumo posts to synthesize
    #[arg(long, env = "SUMO_COUNT", default_value = "20")]
    pub sumo_count: usize,

    /// Frequency rank for the core 相撲 sumo entry
    ///
    /// Content revisions disagree on this rank; unset keeps the authored value.
    #[arg(long, env = "SUMO_CORE_RANK")]
    pub sumo_core_rank: Option<i32>,
}

impl Args {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    pub fn target_counts(&self) -> TargetCounts {
        TargetCounts {
            daily_life: self.daily_count,
            food: self.food_count,
            casual: self.casual_count,
            sumo: self.sumo_count,
        }
    }

    /// Plan used by the frequency populate endpoint and binary
    pub fn seed_plan(&self) -> SeedPlan {
        SeedPlan::Frequency(self.target_counts())
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            sumo_core_rank: self.sumo_core_rank,
        }
    }

    /// Build the catalog this configuration describes
    pub fn catalog(&self) -> Catalog {
        Catalog::new(&self.catalog_options())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.store_timeout_ms == 0 {
            return Err("STORE_TIMEOUT_MS must be greater than zero".to_string());
        }

        if let Some(rank) = self.sumo_core_rank {
            if rank < 1 {
                return Err("SUMO_CORE_RANK must be a positive rank".to_string());
            }
        }

        self.check_targets(&self.catalog())
    }

    /// Every category asked for posts must have examples to cycle over
    pub fn check_targets(&self, catalog: &Catalog) -> Result<(), String> {
        let counts = self.target_counts();
        for category in Category::ALL {
            if counts.get(category) > 0 && catalog.examples(category).is_empty() {
                return Err(format!(
                    "cannot generate {} posts: the {} catalog is empty",
                    category.as_str(),
                    category.as_str()
                ));
            }
        }

        Ok(())
    }
}
