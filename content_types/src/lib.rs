//! # Content Types
//!
//! Shared identifiers and value types for the footer image suite.
//!
//! ## Philosophy
//!
//! - **Typed identifiers**: Posts are addressed by opaque IDs, not paths or
//!   raw integers
//! - **Value semantics**: The footer image is a plain three-field value,
//!   owned 1:1 by its post
//! - **Serializable**: All types derive serde for snapshot persistence and
//!   host interchange

pub mod descriptors;
pub mod footer_image;
pub mod ids;
pub mod meta_keys;

pub use descriptors::{AssetDescriptor, EmbedDescriptor};
pub use footer_image::FooterImage;
pub use ids::PostId;
