//! Asset descriptors returned by the media picker
//!
//! The picker exposes two completion channels, each yielding a different
//! descriptor shape. The widget decides how descriptor fields map onto the
//! stored `title`/`alt` fields.

use serde::{Deserialize, Serialize};

/// Descriptor for a directly selected library asset
///
/// `caption` is carried even though the default widget mapping ignores it;
/// the corrected caption-to-alt mapping is opt-in at the widget layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Asset URL
    pub url: String,
    /// Asset title
    pub title: String,
    /// Asset caption
    pub caption: String,
}

impl AssetDescriptor {
    /// Creates a new asset descriptor
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            caption: caption.into(),
        }
    }
}

/// Descriptor for a remotely embedded asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedDescriptor {
    /// Embedded asset URL
    pub url: String,
    /// Accessibility text supplied with the embed
    pub alt: String,
}

impl EmbedDescriptor {
    /// Creates a new embed descriptor
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}
