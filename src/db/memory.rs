//! In-memory post store
//!
//! Behaves like a single MongoDB collection: natural (insertion) order,
//! generated `_id`s, idempotent index creation. A fail point can be armed to
//! make one operation fail, which is how partial reseed failures are tested.

use bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::content::post::Post;
use crate::db::store::{IndexSpec, PostFilter, PostStore, StoreConnector};
use crate::types::{FeedError, Result};

/// Operation that should fail on its next call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Ping,
    DeleteAll,
    /// Insert this many posts, then fail
    InsertMany { after: usize },
    EnsureIndexes,
    Count,
    Find,
}

/// Posts collection held in memory
#[derive(Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
    indexes: RwLock<Vec<IndexSpec>>,
    fail_point: Mutex<Option<FailPoint>>,
    closed: Mutex<bool>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with posts (assigned fresh `_id`s)
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(with_ids(posts).collect()),
            ..Self::default()
        }
    }

    /// Fail the next matching operation once
    pub async fn fail_next(&self, point: FailPoint) {
        *self.fail_point.lock().await = Some(point);
    }

    pub async fn snapshot(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn index_names(&self) -> Vec<String> {
        self.indexes.read().await.iter().map(|i| i.name.clone()).collect()
    }

    pub async fn is_closed(&self) -> bool {
        *self.closed.lock().await
    }

    /// Take the fail point if it matches `pred`
    async fn trip(&self, pred: impl Fn(&FailPoint) -> bool) -> Option<FailPoint> {
        let mut guard = self.fail_point.lock().await;
        match *guard {
            Some(point) if pred(&point) => guard.take(),
            _ => None,
        }
    }

    async fn check(&self, point: FailPoint) -> Result<()> {
        match self.trip(|p| *p == point).await {
            Some(p) => Err(injected(p)),
            None => Ok(()),
        }
    }
}

fn injected(point: FailPoint) -> FeedError {
    FeedError::Database(format!("injected failure at {:?}", point))
}

fn with_ids(posts: Vec<Post>) -> impl Iterator<Item = Post> {
    posts.into_iter().map(|mut p| {
        p._id.get_or_insert_with(ObjectId::new);
        p
    })
}

#[async_trait::async_trait]
impl PostStore for MemoryPostStore {
    async fn ping(&self) -> Result<()> {
        self.check(FailPoint::Ping).await
    }

    async fn delete_all(&self) -> Result<u64> {
        self.check(FailPoint::DeleteAll).await?;
        let mut posts = self.posts.write().await;
        let deleted = posts.len() as u64;
        posts.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<u64> {
        let fail_after = self
            .trip(|p| matches!(p, FailPoint::InsertMany { .. }))
            .await;

        let mut stored = self.posts.write().await;
        match fail_after {
            Some(point @ FailPoint::InsertMany { after }) => {
                stored.extend(with_ids(posts.into_iter().take(after).collect()));
                Err(injected(point))
            }
            _ => {
                let count = posts.len() as u64;
                stored.extend(with_ids(posts));
                Ok(count)
            }
        }
    }

    async fn ensure_indexes(&self, indexes: &[IndexSpec]) -> Result<()> {
        self.check(FailPoint::EnsureIndexes).await?;
        let mut existing = self.indexes.write().await;
        for spec in indexes {
            if !existing.iter().any(|i| i.name == spec.name) {
                existing.push(spec.clone());
            }
        }
        Ok(())
    }

    async fn count(&self, filter: PostFilter) -> Result<u64> {
        self.check(FailPoint::Count).await?;
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn find_all(&self) -> Result<Vec<Post>> {
        self.check(FailPoint::Find).await?;
        Ok(self.posts.read().await.clone())
    }

    async fn find_sample(&self, limit: usize) -> Result<Vec<Post>> {
        self.check(FailPoint::Find).await?;
        Ok(self.posts.read().await.iter().take(limit).cloned().collect())
    }

    async fn distinct_types(&self) -> Result<Vec<String>> {
        self.check(FailPoint::Find).await?;
        let mut types: Vec<String> = Vec::new();
        for post in self.posts.read().await.iter() {
            if !types.contains(&post.post_type) {
                types.push(post.post_type.clone());
            }
        }
        Ok(types)
    }

    async fn close(&self) {
        *self.closed.lock().await = true;
    }
}

/// Hands out the same shared in-memory store on every connect
#[derive(Clone)]
pub struct MemoryConnector {
    store: Arc<MemoryPostStore>,
    uri: Option<String>,
}

impl MemoryConnector {
    pub fn new(store: Arc<MemoryPostStore>) -> Self {
        Self {
            store,
            uri: Some("memory://posts".to_string()),
        }
    }

    /// Connector that behaves as if no connection string were configured
    pub fn unconfigured(store: Arc<MemoryPostStore>) -> Self {
        Self { store, uri: None }
    }
}

#[async_trait::async_trait]
impl StoreConnector for MemoryConnector {
    fn config_present(&self) -> bool {
        self.uri.is_some()
    }

    fn uri_length(&self) -> usize {
        self.uri.as_ref().map(|u| u.len()).unwrap_or(0)
    }

    async fn connect(&self) -> Result<Box<dyn PostStore>> {
        if self.uri.is_none() {
            return Err(FeedError::Config(
                "MONGODB_URI environment variable is not set".into(),
            ));
        }
        self.store.ping().await?;
        Ok(Box::new(Arc::clone(&self.store)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::post::{Difficulty, ExerciseType, MediaFrequency};

    fn post(post_type: &str, rank: i32, media: MediaFrequency) -> Post {
        Post {
            _id: None,
            post_type: post_type.to_string(),
            japanese: "雨が降る".into(),
            reading: "あめがふる".into(),
            translation: "It's raining".into(),
            explanation: "e".into(),
            difficulty: Difficulty::Beginner,
            tags: vec!["weather".into()],
            audio_first: false,
            exercise_type: ExerciseType::Recognition,
            frequency_rank: rank,
            media_frequency: media,
            priority: 3,
            sumo_category: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_counts() {
        let store = MemoryPostStore::new();
        let inserted = store
            .insert_many(vec![
                post("Weather Report", 140, MediaFrequency::Medium),
                post("Sumo Post", 200, MediaFrequency::High),
            ])
            .await
            .unwrap();
        assert_eq!(inserted, 2);
        assert!(store.snapshot().await.iter().all(|p| p._id.is_some()));
        assert_eq!(store.count(PostFilter::All).await.unwrap(), 2);
        assert_eq!(
            store
                .count(PostFilter::MediaFrequency(MediaFrequency::High))
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            store.distinct_types().await.unwrap(),
            vec!["Weather Report", "Sumo Post"]
        );
    }

    #[tokio::test]
    async fn test_prefilled_store() {
        let store = MemoryPostStore::with_posts(vec![
            post("Weather Report", 140, MediaFrequency::Medium),
            post("Sumo Post", 200, MediaFrequency::High),
        ]);
        let posts = store.snapshot().await;
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p._id.is_some()));
        assert_eq!(posts[0].frequency_rank, 140);
        assert_eq!(store.count(PostFilter::All).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_fail_point_fires_once() {
        let store = MemoryPostStore::with_posts(vec![post("A", 1, MediaFrequency::High)]);
        store.fail_next(FailPoint::DeleteAll).await;
        assert!(store.delete_all().await.is_err());
        assert_eq!(store.delete_all().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_partial_insert() {
        let store = MemoryPostStore::new();
        store.fail_next(FailPoint::InsertMany { after: 2 }).await;
        let batch = (0..5).map(|i| post("A", i, MediaFrequency::High)).collect();
        assert!(store.insert_many(batch).await.is_err());
        assert_eq!(store.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn test_indexes_are_idempotent() {
        let store = MemoryPostStore::new();
        let specs = IndexSpec::for_schema::<Post>();
        store.ensure_indexes(&specs).await.unwrap();
        store.ensure_indexes(&specs).await.unwrap();
        assert_eq!(store.index_names().await.len(), specs.len());
    }

    #[tokio::test]
    async fn test_unconfigured_connector() {
        let connector = MemoryConnector::unconfigured(Arc::new(MemoryPostStore::new()));
        assert!(!connector.config_present());
        assert!(matches!(
            connector.connect().await,
            Err(FeedError::Config(_))
        ));
    }
}
