//! Learning content: catalog, post synthesis and aggregation

pub mod aggregate;
pub mod catalog;
pub mod curated;
pub mod entries;
pub mod post;
pub mod synth;

pub use aggregate::aggregate;
pub use catalog::{Catalog, CatalogEntry, CatalogOptions, Category, CategoryProfile};
pub use post::{Difficulty, ExerciseType, MediaFrequency, Post, POST_COLLECTION, SUMO_POST_TYPE};
pub use synth::synthesize;
