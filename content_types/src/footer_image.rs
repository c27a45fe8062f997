//! Footer image value type

use serde::{Deserialize, Serialize};

/// The footer image attached to a post
///
/// Attached 1:1 to a post and persisted as three plain string fields.
/// An empty `src` means "unset"; `title` and `alt` are only meaningful
/// while `src` is non-empty. Removal is defined as resetting all three
/// fields to empty strings, never as deleting the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterImage {
    /// Absolute or relative image URL; empty means unset
    pub src: String,
    /// Advisory display title; may be empty
    pub title: String,
    /// Accessibility text; may be empty
    pub alt: String,
}

impl FooterImage {
    /// Creates a footer image from the three stored fields
    pub fn new(src: impl Into<String>, title: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
            alt: alt.into(),
        }
    }

    /// Creates the all-empty (unset) footer image
    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    /// Returns true if an image is associated
    ///
    /// Whitespace-only URLs count as unset (trim-then-check).
    pub fn is_set(&self) -> bool {
        !self.src.trim().is_empty()
    }

    /// Resets all three fields to empty strings
    pub fn clear(&mut self) {
        self.src.clear();
        self.title.clear();
        self.alt.clear();
    }
}

impl Default for FooterImage {
    fn default() -> Self {
        Self::empty()
    }
}
