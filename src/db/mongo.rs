//! MongoDB client and collection wrapper
//!
//! Every operation runs under a deadline; a timeout is reported as a database
//! error and never retried.

use bson::{doc, Bson, Document};
use futures_util::StreamExt;
use mongodb::{options::IndexOptions, Client, Collection, IndexModel};
use serde::{de::DeserializeOwned, Serialize};
use std::future::IntoFuture;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::content::post::Post;
use crate::db::store::{IndexSpec, PostFilter, PostStore, StoreConnector};
use crate::types::{FeedError, Result};

/// Trait for schemas that provide index definitions
pub trait IntoIndexes {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)>;
}

/// Append driver timeouts to a connection string
fn with_timeouts(uri: &str, timeout: Duration) -> String {
    let ms = timeout.as_millis();
    let sep = if uri.contains('?') { '&' } else { '?' };
    format!(
        "{}{}serverSelectionTimeoutMS={}&connectTimeoutMS={}",
        uri, sep, ms, ms
    )
}

/// Run a driver call under a deadline
async fn timed<T, F>(op: &str, deadline: Duration, fut: F) -> Result<T>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(FeedError::Database(format!("{} failed: {}", op, e))),
        Err(_) => Err(FeedError::Database(format!(
            "{} timed out after {}ms",
            op,
            deadline.as_millis()
        ))),
    }
}

/// MongoDB client wrapper
#[derive(Clone)]
pub struct MongoClient {
    client: Client,
    db_name: String,
    op_timeout: Duration,
}

impl MongoClient {
    /// Connect and ping the database
    pub async fn new(uri: &str, db_name: &str, op_timeout: Duration) -> Result<Self> {
        debug!("Connecting to MongoDB database '{}'", db_name);

        let client = Client::with_uri_str(with_timeouts(uri, op_timeout))
            .await
            .map_err(|e| FeedError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        timed(
            "MongoDB ping",
            op_timeout,
            client.database(db_name).run_command(doc! { "ping": 1 }),
        )
        .await?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
            op_timeout,
        })
    }

    /// Get a typed collection
    pub fn collection<T>(&self, name: &str) -> MongoCollection<T>
    where
        T: Serialize + DeserializeOwned + Unpin + Send + Sync,
    {
        MongoCollection {
            inner: self.client.database(&self.db_name).collection::<T>(name),
            op_timeout: self.op_timeout,
        }
    }

    pub async fn ping(&self) -> Result<()> {
        timed(
            "MongoDB ping",
            self.op_timeout,
            self.client
                .database(&self.db_name)
                .run_command(doc! { "ping": 1 }),
        )
        .await
        .map(|_| ())
    }

    /// Close pooled connections
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        debug!("MongoDB client shut down");
    }
}

/// Typed MongoDB collection
#[derive(Debug, Clone)]
pub struct MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    inner: Collection<T>,
    op_timeout: Duration,
}

impl<T> MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    /// Create the given indexes; existing indexes with the same spec are kept
    pub async fn apply_indexes(&self, specs: &[IndexSpec]) -> Result<()> {
        if specs.is_empty() {
            return Ok(());
        }

        let indices: Vec<IndexModel> = specs
            .iter()
            .map(|spec| {
                IndexModel::builder()
                    .keys(spec.keys.clone())
                    .options(IndexOptions::builder().name(spec.name.clone()).build())
                    .build()
            })
            .collect();

        timed(
            "Create indexes",
            self.op_timeout,
            self.inner.create_indexes(indices),
        )
        .await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = timed(
            "Delete",
            self.op_timeout,
            self.inner.delete_many(doc! {}),
        )
        .await?;
        Ok(result.deleted_count)
    }

    pub async fn insert_many(&self, items: Vec<T>) -> Result<u64> {
        // The driver rejects an empty batch
        if items.is_empty() {
            return Ok(0);
        }

        let result = timed(
            "Insert",
            self.op_timeout,
            self.inner.insert_many(items),
        )
        .await?;
        Ok(result.inserted_ids.len() as u64)
    }

    pub async fn count(&self, filter: Document) -> Result<u64> {
        timed(
            "Count",
            self.op_timeout,
            self.inner.count_documents(filter),
        )
        .await
    }

    /// Find documents in natural order, optionally limited
    pub async fn find_many(&self, filter: Document, limit: Option<i64>) -> Result<Vec<T>> {
        let find = self.inner.find(filter);
        let find = match limit {
            Some(n) => find.limit(n),
            None => find,
        };
        let cursor = timed("Find", self.op_timeout, find).await?;

        let collect = cursor
            .filter_map(|doc| async move {
                match doc {
                    Ok(d) => Some(d),
                    Err(e) => {
                        error!("Error reading document: {}", e);
                        None
                    }
                }
            })
            .collect::<Vec<T>>();

        tokio::time::timeout(self.op_timeout, collect)
            .await
            .map_err(|_| FeedError::Database("Find timed out while reading cursor".into()))
    }

    pub async fn distinct(&self, field: &str) -> Result<Vec<Bson>> {
        timed(
            "Distinct",
            self.op_timeout,
            self.inner.distinct(field, doc! {}),
        )
        .await
    }
}

/// Posts collection backed by MongoDB
pub struct MongoPostStore {
    client: MongoClient,
    posts: MongoCollection<Post>,
}

impl MongoPostStore {
    pub fn new(client: MongoClient, collection: &str) -> Self {
        let posts = client.collection::<Post>(collection);
        Self { client, posts }
    }
}

#[async_trait::async_trait]
impl PostStore for MongoPostStore {
    async fn ping(&self) -> Result<()> {
        self.client.ping().await
    }

    async fn delete_all(&self) -> Result<u64> {
        self.posts.delete_all().await
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<u64> {
        self.posts.insert_many(posts).await
    }

    async fn ensure_indexes(&self, indexes: &[IndexSpec]) -> Result<()> {
        self.posts.apply_indexes(indexes).await
    }

    async fn count(&self, filter: PostFilter) -> Result<u64> {
        self.posts.count(filter.to_document()).await
    }

    async fn find_all(&self) -> Result<Vec<Post>> {
        self.posts.find_many(doc! {}, None).await
    }

    async fn find_sample(&self, limit: usize) -> Result<Vec<Post>> {
        self.posts.find_many(doc! {}, Some(limit as i64)).await
    }

    async fn distinct_types(&self) -> Result<Vec<String>> {
        let values = self.posts.distinct("type").await?;
        Ok(values
            .into_iter()
            .filter_map(|v| match v {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect())
    }

    async fn close(&self) {
        self.client.shutdown().await;
    }
}

/// Connects to MongoDB once per request
#[derive(Debug, Clone)]
pub struct MongoConnector {
    uri: Option<String>,
    db_name: String,
    collection: String,
    timeout: Duration,
}

impl MongoConnector {
    pub fn new(uri: Option<String>, db_name: &str, collection: &str, timeout: Duration) -> Self {
        Self {
            uri,
            db_name: db_name.to_string(),
            collection: collection.to_string(),
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl StoreConnector for MongoConnector {
    fn config_present(&self) -> bool {
        self.uri.is_some()
    }

    fn uri_length(&self) -> usize {
        self.uri.as_ref().map(|u| u.len()).unwrap_or(0)
    }

    async fn connect(&self) -> Result<Box<dyn PostStore>> {
        let uri = self.uri.as_deref().ok_or_else(|| {
            FeedError::Config("MONGODB_URI environment variable is not set".into())
        })?;

        let client = MongoClient::new(uri, &self.db_name, self.timeout).await?;
        Ok(Box::new(MongoPostStore::new(client, &self.collection)))
    }
}

#[cfg(test)]
mod tests {
    // Store operations need a running MongoDB instance; the workflow and
    // endpoints are covered against the in-memory store instead.
    use super::*;

    #[test]
    fn test_with_timeouts_appends_query() {
        assert_eq!(
            with_timeouts("mongodb://localhost:27017", Duration::from_millis(5000)),
            "mongodb://localhost:27017?serverSelectionTimeoutMS=5000&connectTimeoutMS=5000"
        );
        assert_eq!(
            with_timeouts(
                "mongodb+srv://u:p@cluster.example.net/?retryWrites=true",
                Duration::from_millis(3000)
            ),
            "mongodb+srv://u:p@cluster.example.net/?retryWrites=true&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000"
        );
    }

    #[tokio::test]
    async fn test_timed_out_operation_is_database_error() {
        let started = std::time::Instant::now();
        let result = timed(
            "Find",
            Duration::from_millis(20),
            std::future::pending::<mongodb::error::Result<()>>(),
        )
        .await;

        match result {
            Err(FeedError::Database(msg)) => {
                assert!(msg.contains("timed out"), "{}", msg);
                assert!(msg.contains("20ms"), "{}", msg);
            }
            other => panic!("expected a database timeout, got {:?}", other),
        }
        // Failed once, no retry loop
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_timed_passes_through_result() {
        let value = timed(
            "Count",
            Duration::from_millis(20),
            std::future::ready(Ok::<u64, mongodb::error::Error>(7)),
        )
        .await
        .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_missing_uri_is_config_error() {
        let connector = MongoConnector::new(None, "nihongo-social", "posts", Duration::from_secs(5));
        assert!(!connector.config_present());
        assert_eq!(connector.uri_length(), 0);
        match connector.connect().await {
            Err(FeedError::Config(msg)) => assert!(msg.contains("MONGODB_URI")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("connected without a URI"),
        }
    }

    #[test]
    fn test_uri_length() {
        let uri = "mongodb://localhost:27017".to_string();
        let connector = MongoConnector::new(
            Some(uri.clone()),
            "nihongo-social",
            "posts",
            Duration::from_secs(5),
        );
        assert!(connector.config_present());
        assert_eq!(connector.uri_length(), uri.len());
    }
}
