//! # Post Metadata Store
//!
//! Per-post string key/value persistence for the footer image suite.
//!
//! ## Philosophy
//!
//! - **Post-scoped**: Every key is owned by exactly one post; no cross-post
//!   state
//! - **Last writer wins**: Writes happen only on the synchronous save path;
//!   no concurrent writers are guarded against
//! - **Absent equals empty**: Reading a missing key yields the empty string,
//!   matching the host platform's metadata API
//! - **Deterministic**: BTreeMap storage and versioned JSON snapshots with
//!   stable ordering
//!
//! ## Example
//!
//! ```
//! use content_types::{meta_keys, PostId};
//! use post_meta::MetaStore;
//!
//! let mut store = MetaStore::new();
//! let post_id = PostId::new();
//!
//! store.set(post_id, meta_keys::FOOTER_SRC, "http://x/img.png");
//! assert_eq!(store.get(post_id, meta_keys::FOOTER_SRC), "http://x/img.png");
//! assert_eq!(store.get(post_id, meta_keys::FOOTER_ALT), "");
//! ```

pub mod persistence;

use content_types::{meta_keys, FooterImage, PostId};
use std::collections::BTreeMap;

/// Per-post string key/value store
///
/// This is the system's model of the host platform's metadata API: a flat
/// association between a post identifier and named string fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaStore {
    /// Fields keyed by post, then by field name
    posts: BTreeMap<PostId, BTreeMap<String, String>>,
}

impl MetaStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            posts: BTreeMap::new(),
        }
    }

    /// Returns the stored value for a post field
    ///
    /// Missing posts and missing keys both read as the empty string.
    pub fn get(&self, post_id: PostId, key: &str) -> &str {
        self.posts
            .get(&post_id)
            .and_then(|fields| fields.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Stores a value for a post field, replacing any previous value
    pub fn set(&mut self, post_id: PostId, key: impl Into<String>, value: impl Into<String>) {
        self.posts
            .entry(post_id)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Reads the footer image fields for a post
    ///
    /// Posts with no stored fields yield the all-empty (unset) image.
    pub fn footer_image(&self, post_id: PostId) -> FooterImage {
        FooterImage::new(
            self.get(post_id, meta_keys::FOOTER_SRC),
            self.get(post_id, meta_keys::FOOTER_TITLE),
            self.get(post_id, meta_keys::FOOTER_ALT),
        )
    }

    /// Writes all three footer image fields for a post
    pub fn set_footer_image(&mut self, post_id: PostId, image: &FooterImage) {
        self.set(post_id, meta_keys::FOOTER_SRC, image.src.clone());
        self.set(post_id, meta_keys::FOOTER_TITLE, image.title.clone());
        self.set(post_id, meta_keys::FOOTER_ALT, image.alt.clone());
    }

    /// Drops all fields for a post
    ///
    /// Returns true if the post had any stored fields.
    pub fn remove_post(&mut self, post_id: PostId) -> bool {
        self.posts.remove(&post_id).is_some()
    }

    /// Returns the number of posts with stored fields
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Exports the store contents for persistence
    pub fn export_snapshot(&self) -> persistence::MetaSnapshotData {
        persistence::MetaSnapshotData::from_store(&self.posts)
    }

    /// Replaces the store contents from a snapshot
    pub fn import_snapshot(
        &mut self,
        snapshot: &persistence::MetaSnapshotData,
    ) -> Result<(), persistence::PersistenceError> {
        self.posts = snapshot.to_store()?;
        Ok(())
    }
}
