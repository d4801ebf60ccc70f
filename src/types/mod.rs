//! Shared types for nihongo-feed

pub mod error;

pub use error::{FeedError, ReseedStage, Result};
