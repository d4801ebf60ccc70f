//! nihongo-feed - frequency-ranked Japanese learning posts
//!
//! Builds a feed of short Japanese example posts from a static vocabulary
//! catalog, reseeds it into MongoDB on demand and serves it over HTTP.
//!
//! ## Services
//!
//! - **Populate**: wipe and reseed the posts collection (synthesized or curated)
//! - **Read**: all stored posts, in stored or shuffled order
//! - **Diagnostics**: connection test and a raw collection dump

pub mod config;
pub mod content;
pub mod db;
pub mod logging;
pub mod reseed;
pub mod routes;
pub mod server;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{FeedError, Result};
