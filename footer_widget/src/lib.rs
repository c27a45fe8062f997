//! # Footer Image Widget
//!
//! The editor-side widget state machine: reconciles persisted metadata,
//! picker output, and UI visibility for one post-edit session.
//!
//! ## Philosophy
//!
//! - **Two states, explicit transitions**: A widget is `Empty` or `Set`;
//!   every transition is a method call with an inspectable outcome
//! - **Transient until saved**: The widget holds an unsaved copy of the
//!   three fields; only the ordinary post-save path makes them durable
//! - **One modal frame per session**: The picker frame is constructed
//!   lazily on first use and memoized, so handlers attach exactly once
//! - **Permissive fields**: No URL or length validation at this layer;
//!   sanitization belongs to the save handler
//!
//! ## Example
//!
//! ```
//! use asset_picker::PickerEvent;
//! use content_types::AssetDescriptor;
//! use footer_widget::{FooterImageWidget, WidgetState};
//!
//! let mut widget = FooterImageWidget::new(Default::default());
//! assert_eq!(widget.state(), WidgetState::Empty);
//!
//! let frame = widget.open_picker();
//! let event = frame
//!     .complete_selection(vec![AssetDescriptor::new("http://x/a.png", "T", "C")])
//!     .unwrap();
//! widget.apply_picker_event(event);
//!
//! assert_eq!(widget.state(), WidgetState::Set);
//! assert_eq!(widget.view().fields.src, "http://x/a.png");
//! ```

pub mod view;
pub mod widget;

pub use view::{FormFields, PreviewAttrs, WidgetView};
pub use widget::{FooterImageWidget, SelectionOutcome, WidgetConfig, WidgetState};
