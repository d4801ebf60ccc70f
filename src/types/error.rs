//! Error types for nihongo-feed
//!
//! Every handler error is surfaced to callers as a 500 with an `error` message;
//! the variants only matter for logging and for knowing what state a failed
//! reseed left the collection in.

use hyper::StatusCode;
use serde::Serialize;
use std::fmt;

/// Stage of the reseed workflow at which a failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReseedStage {
    /// Deleting the existing posts. Collection untouched or partially cleared.
    Clearing,
    /// Bulk insert. Collection empty or partially populated.
    Inserting,
    /// Index creation. Collection populated, indexes possibly incomplete.
    Indexing,
    /// Post-insert counts. Collection populated and indexed.
    Verifying,
}

impl ReseedStage {
    /// What the collection may look like after a failure at this stage
    pub fn leaves_collection(&self) -> &'static str {
        match self {
            Self::Clearing => "unchanged or partially cleared",
            Self::Inserting => "empty or partially populated",
            Self::Indexing => "populated, indexes incomplete",
            Self::Verifying => "populated and indexed",
        }
    }
}

impl fmt::Display for ReseedStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clearing => "clearing",
            Self::Inserting => "inserting",
            Self::Indexing => "indexing",
            Self::Verifying => "verifying",
        };
        f.write_str(name)
    }
}

/// Main error type for nihongo-feed operations
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Reseed failed while {stage}: {message}")]
    Reseed { stage: ReseedStage, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FeedError {
    /// Wrap an error raised during a reseed stage
    pub fn at_stage(stage: ReseedStage, err: FeedError) -> Self {
        match err {
            // Already attributed to a stage
            Self::Reseed { .. } => err,
            other => Self::Reseed {
                stage,
                message: other.to_string(),
            },
        }
    }

    /// Stage at which a reseed stopped, if this is a reseed failure
    pub fn stage(&self) -> Option<ReseedStage> {
        match self {
            Self::Reseed { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// HTTP status code for this error
    ///
    /// Callers only ever see 500; there are no structured error codes.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON error: {}", err))
    }
}

impl From<mongodb::error::Error> for FeedError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for nihongo-feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_stage_wraps_database_error() {
        let err = FeedError::at_stage(
            ReseedStage::Inserting,
            FeedError::Database("connection reset".into()),
        );
        assert_eq!(err.stage(), Some(ReseedStage::Inserting));
        assert_eq!(
            err.to_string(),
            "Reseed failed while inserting: Database error: connection reset"
        );
    }

    #[test]
    fn test_at_stage_keeps_original_stage() {
        let inner = FeedError::Reseed {
            stage: ReseedStage::Clearing,
            message: "boom".into(),
        };
        let err = FeedError::at_stage(ReseedStage::Verifying, inner);
        assert_eq!(err.stage(), Some(ReseedStage::Clearing));
    }

    #[test]
    fn test_every_error_is_500() {
        let errors = [
            FeedError::Config("MONGODB_URI environment variable is not set".into()),
            FeedError::Database("timed out".into()),
            FeedError::Internal("x".into()),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
