//! Document store abstraction
//!
//! The reseed workflow and the endpoints only talk to these traits, so the
//! same code runs against MongoDB in production and the in-memory store in
//! tests.

use bson::{doc, Document};
use std::sync::Arc;

use crate::content::post::{MediaFrequency, Post};
use crate::db::mongo::IntoIndexes;
use crate::types::Result;

/// Subset of the posts collection to count
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    All,
    MediaFrequency(MediaFrequency),
    Type(String),
}

impl PostFilter {
    pub fn to_document(&self) -> Document {
        match self {
            Self::All => doc! {},
            Self::MediaFrequency(m) => doc! { "media_frequency": m.as_str() },
            Self::Type(t) => doc! { "type": t.as_str() },
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::MediaFrequency(m) => post.media_frequency == *m,
            Self::Type(t) => post.post_type == *t,
        }
    }
}

/// A named secondary index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSpec {
    pub name: String,
    pub keys: Document,
}

impl IndexSpec {
    /// Index specs declared by a schema
    pub fn for_schema<T: IntoIndexes>() -> Vec<IndexSpec> {
        T::into_indices()
            .into_iter()
            .map(|(keys, opts)| {
                let name = opts
                    .and_then(|o| o.name)
                    .unwrap_or_else(|| keys.keys().cloned().collect::<Vec<_>>().join("_"));
                IndexSpec { name, keys }
            })
            .collect()
    }
}

/// Collection-level operations on stored posts
#[async_trait::async_trait]
pub trait PostStore: Send + Sync {
    /// Round-trip to the store to prove it is reachable
    async fn ping(&self) -> Result<()>;

    /// Delete every post, returning how many were removed
    async fn delete_all(&self) -> Result<u64>;

    /// Bulk insert, returning how many were inserted
    async fn insert_many(&self, posts: Vec<Post>) -> Result<u64>;

    /// Create the given indexes if they do not exist yet
    async fn ensure_indexes(&self, indexes: &[IndexSpec]) -> Result<()>;

    async fn count(&self, filter: PostFilter) -> Result<u64>;

    /// Every post in stored order
    async fn find_all(&self) -> Result<Vec<Post>>;

    /// The first `limit` posts in stored order
    async fn find_sample(&self, limit: usize) -> Result<Vec<Post>>;

    /// Distinct values of the `type` field
    async fn distinct_types(&self) -> Result<Vec<String>>;

    /// Release the connection. Further calls are not expected.
    async fn close(&self) {}
}

#[async_trait::async_trait]
impl<S: PostStore + ?Sized> PostStore for Arc<S> {
    async fn ping(&self) -> Result<()> {
        (**self).ping().await
    }

    async fn delete_all(&self) -> Result<u64> {
        (**self).delete_all().await
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<u64> {
        (**self).insert_many(posts).await
    }

    async fn ensure_indexes(&self, indexes: &[IndexSpec]) -> Result<()> {
        (**self).ensure_indexes(indexes).await
    }

    async fn count(&self, filter: PostFilter) -> Result<u64> {
        (**self).count(filter).await
    }

    async fn find_all(&self) -> Result<Vec<Post>> {
        (**self).find_all().await
    }

    async fn find_sample(&self, limit: usize) -> Result<Vec<Post>> {
        (**self).find_sample(limit).await
    }

    async fn distinct_types(&self) -> Result<Vec<String>> {
        (**self).distinct_types().await
    }

    async fn close(&self) {
        (**self).close().await
    }
}

/// Opens one store connection per request
#[async_trait::async_trait]
pub trait StoreConnector: Send + Sync {
    /// Whether a connection string is configured at all
    fn config_present(&self) -> bool;

    /// Length of the configured connection string (0 when absent)
    fn uri_length(&self) -> usize;

    /// Connect and verify the store is reachable
    async fn connect(&self) -> Result<Box<dyn PostStore>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::post::SUMO_POST_TYPE;

    #[test]
    fn test_filter_documents() {
        assert_eq!(PostFilter::All.to_document(), doc! {});
        assert_eq!(
            PostFilter::MediaFrequency(MediaFrequency::High).to_document(),
            doc! { "media_frequency": "high" }
        );
        assert_eq!(
            PostFilter::Type(SUMO_POST_TYPE.to_string()).to_document(),
            doc! { "type": "Sumo Post" }
        );
    }

    #[test]
    fn test_post_index_specs() {
        let names: Vec<String> = IndexSpec::for_schema::<Post>()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "frequency_rank_1",
                "media_frequency_1",
                "difficulty_1",
                "tags_1",
                "exerciseType_1",
                "priority_1",
                "type_1",
            ]
        );
    }
}
