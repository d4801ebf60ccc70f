//! HTTP server implementation
//!
//! Uses hyper http1 with TokioIo for async handling. Every endpoint path is
//! also reachable under the `/.netlify/functions` prefix so existing clients
//! keep working.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::Args;
use crate::content::Catalog;
use crate::db::{MongoConnector, StoreConnector};
use crate::reseed::SeedPlan;
use crate::routes::{self, json_response, with_cors, PostOrder};
use crate::types::FeedError;

/// Prefix the functions were originally deployed under
pub const FUNCTIONS_PREFIX: &str = "/.netlify/functions";

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// Opens one store connection per request
    pub connector: Arc<dyn StoreConnector>,
    /// Built once at startup, read-only afterwards
    pub catalog: Catalog,
}

impl AppState {
    /// State backed by MongoDB as configured in `args`
    pub fn new(args: Args) -> Self {
        let connector = Arc::new(MongoConnector::new(
            args.mongodb_uri.clone(),
            &args.mongodb_db,
            &args.collection,
            args.store_timeout(),
        ));
        Self::with_connector(args, connector)
    }

    /// State backed by an arbitrary store connector
    pub fn with_connector(args: Args, connector: Arc<dyn StoreConnector>) -> Self {
        let catalog = args.catalog();
        Self {
            args,
            connector,
            catalog,
        }
    }

    /// Random source for one request: seeded when configured, else from entropy
    pub fn rng(&self) -> StdRng {
        match self.args.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub async fn run(state: Arc<AppState>) -> Result<(), FeedError> {
    let listener = TcpListener::bind(state.args.listen).await?;

    info!("nihongo-feed listening on {}", state.args.listen);

    if !state.connector.config_present() {
        warn!("MONGODB_URI is not set - store endpoints will fail until it is configured");
    }
    if let Some(seed) = state.args.rng_seed {
        warn!("Fixed RNG seed {} - hints and shuffles are reproducible", seed);
    }

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new()
                        .preserve_header_case(true)
                        .title_case_headers(true)
                        .serve_connection(io, service)
                        .await
                    {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Log and dispatch an incoming request. Request bodies are ignored.
async fn handle_request(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("[{}] {} {}", addr, method, path);

    Ok(route(state, &method, &path).await)
}

/// Route a request by method and path
pub async fn route(state: Arc<AppState>, method: &Method, path: &str) -> Response<Full<Bytes>> {
    let path = path.strip_prefix(FUNCTIONS_PREFIX).unwrap_or(path);
    let read = matches!(*method, Method::GET | Method::POST);

    match (method, path) {
        // CORS preflight
        (&Method::OPTIONS, _) => preflight_response(),

        (&Method::GET, "/health") => routes::health_check(state),
        (&Method::GET, "/version") => routes::version_info(),

        (_, "/populate-120-posts") if read => {
            let plan = state.args.seed_plan();
            routes::handle_populate(state, plan).await
        }
        (_, "/populate-smart-content") if read => {
            routes::handle_populate(state, SeedPlan::Curated).await
        }

        (_, "/get-posts") if read => routes::handle_list_posts(state, PostOrder::Stored).await,
        (_, "/get-shuffled-posts") if read => {
            routes::handle_list_posts(state, PostOrder::Shuffled).await
        }

        (_, "/test-connection") if read => routes::handle_test_connection(state).await,
        (_, "/debug-database") if read => routes::handle_debug_database(state).await,

        _ => not_found_response(path),
    }
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    with_cors(Response::new(Full::new(Bytes::new())))
}

/// Not found response
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "path": path,
    });
    json_response(StatusCode::NOT_FOUND, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{FailPoint, MemoryConnector, MemoryPostStore};
    use clap::Parser;
    use http_body_util::BodyExt;
    use serde_json::Value;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["nihongo-feed", "--rng-seed", "17", "--store-timeout-ms", "5000"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    fn state_with(store: Arc<MemoryPostStore>) -> Arc<AppState> {
        Arc::new(AppState::with_connector(
            args(&[]),
            Arc::new(MemoryConnector::new(store)),
        ))
    }

    async fn call(state: &Arc<AppState>, method: Method, path: &str) -> (StatusCode, Value) {
        let response = route(Arc::clone(state), &method, path).await;
        let status = response.status();
        assert_eq!(
            response.headers()["Access-Control-Allow-Origin"],
            "*",
            "{} {}",
            method,
            path
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_populate_then_read() {
        let store = Arc::new(MemoryPostStore::new());
        let state = state_with(Arc::clone(&store));

        let (status, body) = call(&state, Method::POST, "/populate-120-posts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["insertedCount"], 120);
        assert_eq!(body["totalCount"], 120);
        assert_eq!(body["breakdown"]["food"], 30);
        assert!(store.is_closed().await);

        let (status, body) = call(&state, Method::GET, "/get-posts").await;
        assert_eq!(status, StatusCode::OK);
        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 120);
        let ranks: Vec<i64> = posts
            .iter()
            .map(|p| p["frequency_rank"].as_i64().unwrap())
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        assert!(posts[0]["audioFirst"].is_boolean());
        let id = posts[0]["_id"].as_str().unwrap();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(posts[0]["exerciseType"].is_string());

        let (status, body) = call(&state, Method::GET, "/get-shuffled-posts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 120);
    }

    #[tokio::test]
    async fn test_functions_prefix_and_smart_content() {
        let state = state_with(Arc::new(MemoryPostStore::new()));
        let (status, body) = call(
            &state,
            Method::GET,
            "/.netlify/functions/populate-smart-content",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["plan"], "curated");
        assert_eq!(body["insertedCount"], 15);
        assert_eq!(body["highFrequencyCount"], 14);
    }

    #[tokio::test]
    async fn test_empty_store_read() {
        let state = state_with(Arc::new(MemoryPostStore::new()));
        let (status, body) = call(&state, Method::GET, "/get-posts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_missing_uri_is_500_with_error() {
        let state = Arc::new(AppState::with_connector(
            args(&[]),
            Arc::new(MemoryConnector::unconfigured(Arc::new(MemoryPostStore::new()))),
        ));

        let (status, body) = call(&state, Method::GET, "/get-posts").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("MONGODB_URI"));

        let (status, body) = call(&state, Method::GET, "/test-connection").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["configPresent"], false);
        assert_eq!(body["reachable"], false);
        assert_eq!(body["mongodbUriLength"], 0);

        let (status, body) = call(&state, Method::POST, "/populate-120-posts").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body.get("stage").is_none());
    }

    #[tokio::test]
    async fn test_partial_reseed_reports_stage() {
        let store = Arc::new(MemoryPostStore::new());
        let state = state_with(Arc::clone(&store));
        store.fail_next(FailPoint::EnsureIndexes).await;

        let (status, body) = call(&state, Method::POST, "/populate-120-posts").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["stage"], "indexing");
        assert_eq!(store.snapshot().await.len(), 120);
    }

    #[tokio::test]
    async fn test_debug_and_connection() {
        let state = state_with(Arc::new(MemoryPostStore::new()));
        call(&state, Method::POST, "/populate-120-posts").await;

        let (status, body) = call(&state, Method::GET, "/test-connection").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reachable"], true);
        assert_eq!(body["configPresent"], true);

        let (status, body) = call(&state, Method::GET, "/debug-database").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCount"], 120);
        assert_eq!(body["actualPostsReturned"], 120);
        assert_eq!(body["samplePosts"].as_array().unwrap().len(), 3);
        assert_eq!(body["distinctTypes"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_preflight_and_not_found() {
        let state = state_with(Arc::new(MemoryPostStore::new()));

        let response = route(Arc::clone(&state), &Method::OPTIONS, "/get-posts").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["Access-Control-Allow-Methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            response.headers()["Access-Control-Allow-Headers"],
            "Content-Type"
        );

        let (status, body) = call(&state, Method::GET, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["path"], "/nope");

        let (status, _) = call(&state, Method::DELETE, "/get-posts").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_and_version() {
        let state = state_with(Arc::new(MemoryPostStore::new()));

        let (status, body) = call(&state, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["healthy"], true);
        assert_eq!(body["seeded"], true);

        let (status, body) = call(&state, Method::GET, "/version").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "nihongo-feed");
    }

    #[tokio::test]
    async fn test_seeded_shuffle_is_stable_across_requests() {
        let state = state_with(Arc::new(MemoryPostStore::new()));
        call(&state, Method::POST, "/populate-120-posts").await;
        let (_, a) = call(&state, Method::GET, "/get-shuffled-posts").await;
        let (_, b) = call(&state, Method::GET, "/get-shuffled-posts").await;
        assert_eq!(a, b);
    }
}
