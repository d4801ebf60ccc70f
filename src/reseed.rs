//! Reseed workflow
//!
//! Wipes the posts collection, inserts a freshly built batch, ensures the
//! secondary indexes and reports verification counts. The stages run in order
//! with no rollback:
//!
//! | stage     | collection after a failure here      |
//! |-----------|--------------------------------------|
//! | clearing  | unchanged or partially cleared       |
//! | inserting | empty or partially populated         |
//! | indexing  | populated, indexes incomplete        |
//! | verifying | populated and indexed                |
//!
//! Concurrent reseeds against one collection are not synchronized.

use rand::Rng;
use serde::Serialize;
use tracing::{error, info};

use crate::content::{
    aggregate, curated, synthesize, Catalog, Category, MediaFrequency, Post, SUMO_POST_TYPE,
};
use crate::db::{IndexSpec, PostFilter, PostStore};
use crate::types::{FeedError, ReseedStage, Result};

/// Posts to synthesize per category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCounts {
    pub daily_life: usize,
    pub food: usize,
    pub casual: usize,
    pub sumo: usize,
}

impl TargetCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::DailyLife => self.daily_life,
            Category::Food => self.food,
            Category::Casual => self.casual,
            Category::Sumo => self.sumo,
        }
    }
}

impl Default for TargetCounts {
    /// The 120-post feed: 50 daily-life, 30 food, 20 casual, 20 sumo
    fn default() -> Self {
        Self {
            daily_life: 50,
            food: 30,
            casual: 20,
            sumo: 20,
        }
    }
}

/// Which batch a reseed inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPlan {
    /// Synthesized from the catalog at the given counts
    Frequency(TargetCounts),
    /// The hand-authored curated set
    Curated,
}

impl SeedPlan {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Curated => "curated",
        }
    }
}

/// Inserted posts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub daily_life: usize,
    pub food: usize,
    pub casual: usize,
    pub sumo: usize,
}

impl CategoryBreakdown {
    fn record(&mut self, category: Category, count: usize) {
        let slot = match category {
            Category::DailyLife => &mut self.daily_life,
            Category::Food => &mut self.food,
            Category::Casual => &mut self.casual,
            Category::Sumo => &mut self.sumo,
        };
        *slot += count;
    }
}

/// Aggregated batch ready for insertion
#[derive(Debug, Clone)]
pub struct SeedBatch {
    pub posts: Vec<Post>,
    pub breakdown: CategoryBreakdown,
}

/// Outcome of a successful reseed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReseedReport {
    pub deleted_count: u64,
    pub inserted_count: u64,
    pub total_count: u64,
    pub breakdown: CategoryBreakdown,
    pub high_frequency_count: u64,
    pub sumo_count: u64,
}

/// Build the batch for a plan: per-category posts in `Category::ALL` order,
/// then stable-sorted by frequency rank.
pub fn build_batch<R: Rng + ?Sized>(catalog: &Catalog, plan: &SeedPlan, rng: &mut R) -> SeedBatch {
    let per_category: Vec<(Category, Vec<Post>)> = match plan {
        SeedPlan::Frequency(counts) => catalog
            .sections()
            .map(|(profile, examples)| {
                let target = counts.get(profile.category);
                (profile.category, synthesize(profile, examples, target, &mut *rng))
            })
            .collect(),
        SeedPlan::Curated => curated::batches(),
    };

    let mut breakdown = CategoryBreakdown::default();
    for (category, posts) in &per_category {
        breakdown.record(*category, posts.len());
    }

    SeedBatch {
        posts: aggregate(per_category.into_iter().map(|(_, posts)| posts)),
        breakdown,
    }
}

/// Run the full reseed workflow against `store`.
///
/// Errors carry the stage at which the workflow stopped; see the module docs
/// for what the collection looks like afterwards.
pub async fn reseed<S, R>(
    store: &S,
    catalog: &Catalog,
    plan: &SeedPlan,
    rng: &mut R,
) -> Result<ReseedReport>
where
    S: PostStore + ?Sized,
    R: Rng + ?Sized,
{
    let result = run_stages(store, catalog, plan, rng).await;
    if let Err(ref e) = result {
        if let Some(stage) = e.stage() {
            error!(
                plan = plan.name(),
                %stage,
                "Reseed aborted: {} (collection {})",
                e,
                stage.leaves_collection()
            );
        }
    }
    result
}

async fn run_stages<S, R>(
    store: &S,
    catalog: &Catalog,
    plan: &SeedPlan,
    rng: &mut R,
) -> Result<ReseedReport>
where
    S: PostStore + ?Sized,
    R: Rng + ?Sized,
{
    let deleted_count = store
        .delete_all()
        .await
        .map_err(|e| FeedError::at_stage(ReseedStage::Clearing, e))?;
    info!(plan = plan.name(), deleted_count, "Cleared existing posts");

    // Synthesis is pure; nothing to attribute to a stage
    let batch = build_batch(catalog, plan, rng);
    info!(
        generated = batch.posts.len(),
        daily_life = batch.breakdown.daily_life,
        food = batch.breakdown.food,
        casual = batch.breakdown.casual,
        sumo = batch.breakdown.sumo,
        "Generated posts"
    );

    let inserted_count = store
        .insert_many(batch.posts)
        .await
        .map_err(|e| FeedError::at_stage(ReseedStage::Inserting, e))?;
    info!(inserted_count, "Inserted posts");

    let indexes = IndexSpec::for_schema::<Post>();
    store
        .ensure_indexes(&indexes)
        .await
        .map_err(|e| FeedError::at_stage(ReseedStage::Indexing, e))?;
    info!(indexes = indexes.len(), "Ensured post indexes");

    let verify = |e: FeedError| FeedError::at_stage(ReseedStage::Verifying, e);
    let total_count = store.count(PostFilter::All).await.map_err(verify)?;
    let high_frequency_count = store
        .count(PostFilter::MediaFrequency(MediaFrequency::High))
        .await
        .map_err(verify)?;
    let sumo_count = store
        .count(PostFilter::Type(SUMO_POST_TYPE.to_string()))
        .await
        .map_err(verify)?;
    info!(
        total_count,
        high_frequency_count, sumo_count, "Reseed complete"
    );

    Ok(ReseedReport {
        deleted_count,
        inserted_count,
        total_count,
        breakdown: batch.breakdown,
        high_frequency_count,
        sumo_count,
    })
}
