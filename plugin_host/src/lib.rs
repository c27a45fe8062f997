//! # Plugin Host
//!
//! The composition root: named extension points, explicit callback
//! registration, and the footer image plugin wiring.
//!
//! ## Philosophy
//!
//! - **No ambient registry**: Callbacks are registered on an owned
//!   `ExtensionPoints` object, never on global mutable state
//! - **Named, ordered dispatch**: Filters run in registration order under
//!   unique names; duplicate names are rejected
//! - **Inspectable**: Every dispatch is recorded as a structured log entry
//!   with bounded history
//!
//! ## Example
//!
//! ```
//! use content_types::PostId;
//! use plugin_host::{ExtensionPoints, FooterImagePlugin};
//! use post_meta::MetaStore;
//!
//! let mut points = ExtensionPoints::new();
//! let plugin = FooterImagePlugin::new(Default::default());
//! plugin.register(&mut points).unwrap();
//!
//! let store = MetaStore::new();
//! let rendered = points.apply_content_filters("<p>Hi</p>", PostId::new(), true, &store);
//! assert_eq!(rendered, "<p>Hi</p>");
//! ```

pub mod extension_points;
pub mod log;
pub mod plugin;

pub use extension_points::{ContentFilterFn, ExtensionPoints, HostError, SaveActionFn};
pub use log::{DispatchEntry, DispatchLevel, DispatchLog};
pub use plugin::FooterImagePlugin;
