//! Post document schema
//!
//! A post is one persisted learning record. Field names on the wire match the
//! documents the feed clients already read (`audioFirst`, `frequency_rank`, ...).

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::IntoIndexes;

/// Collection name for posts
pub const POST_COLLECTION: &str = "posts";

/// Type label carried by synthesized sumo posts
pub const SUMO_POST_TYPE: &str = "Sumo Post";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Recognition,
    Phonetic,
}

/// Coarse informational label, never used for filtering
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaFrequency {
    High,
    Medium,
}

impl MediaFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// Post document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Post {
    /// MongoDB document ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Category label shown in the feed ("Daily Life Post", "Sumo Post", ...)
    #[serde(rename = "type")]
    pub post_type: String,

    pub japanese: String,

    /// Kana reading, may be empty
    #[serde(default)]
    pub reading: String,

    pub translation: String,

    pub explanation: String,

    pub difficulty: Difficulty,

    pub tags: Vec<String>,

    #[serde(rename = "audioFirst")]
    pub audio_first: bool,

    #[serde(rename = "exerciseType")]
    pub exercise_type: ExerciseType,

    pub frequency_rank: i32,

    pub media_frequency: MediaFrequency,

    pub priority: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sumo_category: Option<String>,
}

impl Post {
    /// Whether the fields every feed client relies on are filled in
    pub fn is_complete(&self) -> bool {
        !self.japanese.is_empty() && !self.reading.is_empty() && !self.translation.is_empty()
    }

    /// JSON sent to feed clients. `_id` goes out as a plain hex string
    /// rather than the extended-JSON `{"$oid": ...}` form.
    pub fn to_client_json(&self) -> serde_json::Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        if let (Some(id), Some(fields)) = (self._id, value.as_object_mut()) {
            fields.insert("_id".to_string(), serde_json::Value::String(id.to_hex()));
        }
        Ok(value)
    }
}

fn named(name: &str) -> Option<IndexOptions> {
    Some(IndexOptions::builder().name(name.to_string()).build())
}

impl IntoIndexes for Post {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            (doc! { "frequency_rank": 1 }, named("frequency_rank_1")),
            (doc! { "media_frequency": 1 }, named("media_frequency_1")),
            (doc! { "difficulty": 1 }, named("difficulty_1")),
            // Multikey over the tag array
            (doc! { "tags": 1 }, named("tags_1")),
            (doc! { "exerciseType": 1 }, named("exerciseType_1")),
            (doc! { "priority": 1 }, named("priority_1")),
            (doc! { "type": 1 }, named("type_1")),
        ]
    }
}
