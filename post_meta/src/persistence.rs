//! Metadata snapshot persistence
//!
//! Loading and saving the per-post field store as versioned JSON. All
//! output is deterministic: BTreeMap keys give stable ordering, posts are
//! keyed by their UUID string form.

use content_types::PostId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Serializable container for the store contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSnapshotData {
    /// Version of the snapshot format (for future migrations)
    pub version: u32,
    /// Post fields keyed by UUID string, then field name
    pub posts: BTreeMap<String, BTreeMap<String, String>>,
}

impl MetaSnapshotData {
    /// Current version of the snapshot format
    pub const CURRENT_VERSION: u32 = 1;

    /// Creates a new empty snapshot
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            posts: BTreeMap::new(),
        }
    }

    /// Creates a snapshot from store contents
    pub fn from_store(posts: &BTreeMap<PostId, BTreeMap<String, String>>) -> Self {
        let mut data = Self::new();
        for (post_id, fields) in posts {
            data.posts
                .insert(post_id.as_uuid().to_string(), fields.clone());
        }
        data
    }

    /// Converts snapshot contents back into store form
    pub fn to_store(
        &self,
    ) -> Result<BTreeMap<PostId, BTreeMap<String, String>>, PersistenceError> {
        let mut posts = BTreeMap::new();
        for (key, fields) in &self.posts {
            let uuid = Uuid::parse_str(key)
                .map_err(|_| PersistenceError::InvalidPostId(key.clone()))?;
            posts.insert(PostId::from_uuid(uuid), fields.clone());
        }
        Ok(posts)
    }
}

impl Default for MetaSnapshotData {
    fn default() -> Self {
        Self::new()
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur during persistence operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// Failed to serialize the snapshot
    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    /// Failed to deserialize the snapshot
    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    /// Unsupported snapshot version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    /// A snapshot post key is not a valid UUID
    #[error("Invalid post ID in snapshot: {0}")]
    InvalidPostId(String),
}

/// Serializes a snapshot to JSON bytes
pub fn serialize_snapshot(data: &MetaSnapshotData) -> PersistenceResult<Vec<u8>> {
    serde_json::to_vec_pretty(data)
        .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
}

/// Deserializes a snapshot from JSON bytes
pub fn deserialize_snapshot(bytes: &[u8]) -> PersistenceResult<MetaSnapshotData> {
    let data: MetaSnapshotData = serde_json::from_slice(bytes)
        .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?;

    if data.version != MetaSnapshotData::CURRENT_VERSION {
        return Err(PersistenceError::UnsupportedVersion(data.version));
    }

    Ok(data)
}

/// Attempts to load a snapshot from bytes, falling back to empty on error
pub fn load_snapshot_safe(bytes: &[u8]) -> MetaSnapshotData {
    deserialize_snapshot(bytes).unwrap_or_else(|_| MetaSnapshotData::new())
}
