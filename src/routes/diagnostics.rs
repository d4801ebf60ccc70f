//! Diagnostic endpoints
//!
//! `/test-connection` checks configuration and reachability, `/debug-database`
//! dumps counts and a few raw records. Both are read-only.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use super::json_response;
use crate::content::Post;
use crate::db::{PostFilter, PostStore, StoreConnector};
use crate::server::AppState;
use crate::types::Result;

/// Records included in the debug sample
pub const SAMPLE_LIMIT: usize = 3;

/// Result of a connection check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionReport {
    pub reachable: bool,
    pub config_present: bool,
    pub mongodb_uri_length: usize,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Raw view of the posts collection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugDump {
    pub total_count: u64,
    pub actual_posts_returned: usize,
    /// Posts in client JSON form
    pub first_post: Option<Value>,
    pub sample_posts: Vec<Value>,
    pub distinct_types: Vec<String>,
    pub timestamp: String,
}

/// Check whether a store is configured and answers a ping
pub async fn test_connection(connector: &dyn StoreConnector) -> ConnectionReport {
    let config_present = connector.config_present();
    let mongodb_uri_length = connector.uri_length();

    let outcome = match connector.connect().await {
        Ok(store) => {
            let ping = store.ping().await;
            store.close().await;
            ping
        }
        Err(e) => Err(e),
    };

    let (reachable, message, error) = match outcome {
        Ok(()) => (true, "MongoDB connection successful".to_string(), None),
        Err(e) => (false, "MongoDB connection failed".to_string(), Some(e.to_string())),
    };

    ConnectionReport {
        reachable,
        config_present,
        mongodb_uri_length,
        message,
        timestamp: chrono::Utc::now().to_rfc3339(),
        error,
    }
}

/// Counts, the full listing size, a short sample and the distinct post types
pub async fn debug_dump<S: PostStore + ?Sized>(store: &S) -> Result<DebugDump> {
    let total_count = store.count(PostFilter::All).await?;
    let posts = store.find_all().await?;
    let sample_posts = store.find_sample(SAMPLE_LIMIT).await?;
    let distinct_types = store.distinct_types().await?;

    Ok(DebugDump {
        total_count,
        actual_posts_returned: posts.len(),
        first_post: posts.first().map(Post::to_client_json).transpose()?,
        sample_posts: sample_posts
            .iter()
            .map(Post::to_client_json)
            .collect::<serde_json::Result<Vec<_>>>()?,
        distinct_types,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handle `/test-connection`
pub async fn handle_test_connection(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let report = test_connection(state.connector.as_ref()).await;
    if report.reachable {
        info!("Connection test passed");
        json_response(StatusCode::OK, &report)
    } else {
        error!(
            config_present = report.config_present,
            "Connection test failed: {}",
            report.error.as_deref().unwrap_or("unknown error")
        );
        json_response(StatusCode::INTERNAL_SERVER_ERROR, &report)
    }
}

/// Handle `/debug-database`
pub async fn handle_debug_database(state: Arc<AppState>) -> Response<Full<Bytes>> {
    match dump(&state).await {
        Ok(dump) => {
            info!(
                total = dump.total_count,
                types = dump.distinct_types.len(),
                "Debug dump"
            );
            json_response(StatusCode::OK, &dump)
        }
        Err(e) => {
            error!("Debug dump failed: {}", e);
            super::error_response(&e)
        }
    }
}

async fn dump(state: &AppState) -> Result<DebugDump> {
    let store = state.connector.connect().await?;
    let result = debug_dump(&*store).await;
    store.close().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::curated;
    use crate::db::{FailPoint, MemoryConnector, MemoryPostStore};

    fn curated_posts() -> Vec<Post> {
        curated::batches()
            .into_iter()
            .flat_map(|(_, posts)| posts)
            .collect()
    }

    #[tokio::test]
    async fn test_connection_reachable() {
        let store = Arc::new(MemoryPostStore::new());
        let connector = MemoryConnector::new(Arc::clone(&store));
        let report = test_connection(&connector).await;
        assert!(report.reachable);
        assert!(report.config_present);
        assert_eq!(report.mongodb_uri_length, connector.uri_length());
        assert!(report.error.is_none());
        assert!(store.is_closed().await);
    }

    #[tokio::test]
    async fn test_connection_without_config() {
        let connector = MemoryConnector::unconfigured(Arc::new(MemoryPostStore::new()));
        let report = test_connection(&connector).await;
        assert!(!report.reachable);
        assert!(!report.config_present);
        assert_eq!(report.mongodb_uri_length, 0);
        assert!(report.error.unwrap().contains("MONGODB_URI"));
    }

    #[tokio::test]
    async fn test_connection_unreachable() {
        let store = Arc::new(MemoryPostStore::new());
        store.fail_next(FailPoint::Ping).await;
        let report = test_connection(&MemoryConnector::new(store)).await;
        assert!(!report.reachable);
        assert!(report.config_present);
    }

    #[tokio::test]
    async fn test_debug_dump() {
        let store = MemoryPostStore::with_posts(curated_posts());
        let dump = debug_dump(&store).await.unwrap();
        assert_eq!(dump.total_count, 15);
        assert_eq!(dump.actual_posts_returned, 15);
        assert_eq!(dump.sample_posts.len(), SAMPLE_LIMIT);
        assert_eq!(dump.first_post.as_ref(), dump.sample_posts.first());
        assert!(dump.sample_posts.iter().all(|p| p["_id"].is_string()));
        assert!(dump.distinct_types.contains(&"Writing Practice".to_string()));
        // Two posts share the "Writing Practice" type
        assert_eq!(dump.distinct_types.len(), 14);
    }

    #[tokio::test]
    async fn test_debug_dump_empty_store() {
        let dump = debug_dump(&MemoryPostStore::new()).await.unwrap();
        assert_eq!(dump.total_count, 0);
        assert!(dump.first_post.is_none());
        assert!(dump.sample_posts.is_empty());
        assert!(dump.distinct_types.is_empty());
    }
}
