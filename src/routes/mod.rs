//! HTTP routes for nihongo-feed

pub mod diagnostics;
pub mod health;
pub mod populate;
pub mod posts;

pub use diagnostics::{handle_debug_database, handle_test_connection};
pub use health::{health_check, version_info};
pub use populate::handle_populate;
pub use posts::{handle_list_posts, list_posts, PostOrder};

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use hyper::{Response, StatusCode};
use serde::Serialize;
use tracing::error;

use crate::types::FeedError;

/// Attach the permissive cross-origin headers every response carries
pub fn with_cors(mut response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    response
}

/// Serialize `body` as a JSON response
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let (status, json) = match serde_json::to_vec(body) {
        Ok(json) => (status, json),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"error":"Serialization failed"}"#.to_vec(),
            )
        }
    };

    let mut response = Response::new(Full::new(Bytes::from(json)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    with_cors(response)
}

/// `{"error": message}` with the error's status code
pub fn error_response(err: &FeedError) -> Response<Full<Bytes>> {
    json_response(
        err.status_code(),
        &serde_json::json!({ "error": err.to_string() }),
    )
}
