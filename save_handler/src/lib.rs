//! # Save Handler
//!
//! Persists submitted footer image fields on the post-save path.
//!
//! ## Philosophy
//!
//! - **Partial submissions are partial writes**: Only fields present in the
//!   request are written; absent fields are never implicitly cleared
//! - **Sanitize at the boundary**: Every incoming value passes plain-text
//!   sanitization before it reaches the store
//! - **Silent skips, not errors**: Missing fields are not an error condition
//!
//! ## Example
//!
//! ```
//! use content_types::{meta_keys, PostId};
//! use post_meta::MetaStore;
//! use save_handler::{save_post_fields, SaveRequest};
//!
//! let mut store = MetaStore::new();
//! let post_id = PostId::new();
//!
//! let request = SaveRequest::new().with_field(meta_keys::FOOTER_SRC, "http://y");
//! let written = save_post_fields(&mut store, post_id, &request);
//!
//! assert_eq!(written, vec![meta_keys::FOOTER_SRC.to_string()]);
//! assert_eq!(store.get(post_id, meta_keys::FOOTER_SRC), "http://y");
//! ```

pub mod sanitize;

pub use sanitize::sanitize_text_field;

use content_types::{meta_keys, PostId};
use post_meta::MetaStore;
use std::collections::BTreeMap;

/// A post-save form submission
///
/// An ordered map of submitted field name to raw (unsanitized) value.
/// Only the three footer image fields are consumed by this handler; any
/// other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRequest {
    fields: BTreeMap<String, String>,
}

impl SaveRequest {
    /// Creates an empty request
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Adds a submitted field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the raw value of a submitted field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns true if the field was submitted
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of submitted fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields were submitted
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Writes the submitted footer image fields to the store
///
/// For each of the three field names present in the request, the value is
/// sanitized as plain text and written under the saved post's identifier.
/// Fields absent from the request are left untouched. Returns the keys
/// written, in processing order.
pub fn save_post_fields(
    store: &mut MetaStore,
    post_id: PostId,
    request: &SaveRequest,
) -> Vec<String> {
    let mut written = Vec::new();
    for key in meta_keys::ALL {
        if let Some(raw) = request.field(key) {
            store.set(post_id, key, sanitize_text_field(raw));
            written.push(key.to_string());
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_writes_nothing() {
        let mut store = MetaStore::new();
        let post_id = PostId::new();

        let written = save_post_fields(&mut store, post_id, &SaveRequest::new());
        assert!(written.is_empty());
        assert_eq!(store.post_count(), 0);
    }

    #[test]
    fn test_full_request_writes_all_fields() {
        let mut store = MetaStore::new();
        let post_id = PostId::new();

        let request = SaveRequest::new()
            .with_field(meta_keys::FOOTER_SRC, "http://x/img.png")
            .with_field(meta_keys::FOOTER_TITLE, "Title")
            .with_field(meta_keys::FOOTER_ALT, "Alt");

        let written = save_post_fields(&mut store, post_id, &request);
        assert_eq!(written.len(), 3);
        assert_eq!(store.get(post_id, meta_keys::FOOTER_SRC), "http://x/img.png");
        assert_eq!(store.get(post_id, meta_keys::FOOTER_TITLE), "Title");
        assert_eq!(store.get(post_id, meta_keys::FOOTER_ALT), "Alt");
    }

    #[test]
    fn test_partial_request_leaves_other_fields_untouched() {
        let mut store = MetaStore::new();
        let post_id = PostId::new();

        store.set(post_id, meta_keys::FOOTER_TITLE, "Old title");
        store.set(post_id, meta_keys::FOOTER_ALT, "Old alt");

        let request = SaveRequest::new().with_field(meta_keys::FOOTER_SRC, "http://y");
        let written = save_post_fields(&mut store, post_id, &request);

        assert_eq!(written, vec![meta_keys::FOOTER_SRC.to_string()]);
        assert_eq!(store.get(post_id, meta_keys::FOOTER_SRC), "http://y");
        assert_eq!(store.get(post_id, meta_keys::FOOTER_TITLE), "Old title");
        assert_eq!(store.get(post_id, meta_keys::FOOTER_ALT), "Old alt");
    }

    #[test]
    fn test_values_are_sanitized() {
        let mut store = MetaStore::new();
        let post_id = PostId::new();

        let request = SaveRequest::new()
            .with_field(meta_keys::FOOTER_TITLE, "  a <b>bold</b>\ntitle  ");
        save_post_fields(&mut store, post_id, &request);

        assert_eq!(store.get(post_id, meta_keys::FOOTER_TITLE), "a bold title");
    }

    #[test]
    fn test_empty_strings_overwrite_on_save() {
        // A "removed" image reaches the store as three empty fields.
        let mut store = MetaStore::new();
        let post_id = PostId::new();

        store.set(post_id, meta_keys::FOOTER_SRC, "http://x/img.png");

        let request = SaveRequest::new()
            .with_field(meta_keys::FOOTER_SRC, "")
            .with_field(meta_keys::FOOTER_TITLE, "")
            .with_field(meta_keys::FOOTER_ALT, "");
        save_post_fields(&mut store, post_id, &request);

        assert_eq!(store.get(post_id, meta_keys::FOOTER_SRC), "");
        assert!(!store.footer_image(post_id).is_set());
    }

    #[test]
    fn test_unrelated_fields_are_ignored() {
        let mut store = MetaStore::new();
        let post_id = PostId::new();

        let request = SaveRequest::new()
            .with_field("post-title", "Hello")
            .with_field(meta_keys::FOOTER_SRC, "http://y");
        let written = save_post_fields(&mut store, post_id, &request);

        assert_eq!(written, vec![meta_keys::FOOTER_SRC.to_string()]);
        assert_eq!(store.get(post_id, "post-title"), "");
    }

    #[test]
    fn test_request_accessors() {
        let request = SaveRequest::new().with_field(meta_keys::FOOTER_SRC, "http://y");

        assert!(request.contains(meta_keys::FOOTER_SRC));
        assert!(!request.contains(meta_keys::FOOTER_ALT));
        assert_eq!(request.field(meta_keys::FOOTER_SRC), Some("http://y"));
        assert_eq!(request.len(), 1);
        assert!(!request.is_empty());
    }
}
