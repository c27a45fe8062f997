//! # Asset Picker
//!
//! A modal media frame for choosing or embedding a single asset.
//!
//! ## Philosophy
//!
//! - **Modal**: While the frame is open, nothing else interacts with it;
//!   completions are only accepted on an open frame
//! - **Two completion channels**: Direct library selection and remote URL
//!   embed, each yielding its own descriptor shape
//! - **Single instance friendly**: The frame is cheap to hold for a whole
//!   edit session; reopening reuses the same object
//! - **Testable**: Completions are explicit method calls returning events
//!
//! ## Example
//!
//! ```
//! use asset_picker::{MediaFrame, PickerEvent};
//! use content_types::AssetDescriptor;
//!
//! let mut frame = MediaFrame::single();
//! frame.open();
//!
//! let event = frame
//!     .complete_selection(vec![AssetDescriptor::new("http://x/a.png", "T", "C")])
//!     .unwrap();
//! assert!(matches!(event, PickerEvent::Selected(_)));
//! assert!(!frame.is_open());
//! ```

use content_types::{AssetDescriptor, EmbedDescriptor};
use thiserror::Error;

/// How many assets a frame allows per completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one asset per completion
    Single,
    /// Any number of assets per completion
    Multiple,
}

/// Frame construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Selection mode for this frame
    pub selection: SelectionMode,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            selection: SelectionMode::Single,
        }
    }
}

/// Completion event delivered by the frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// An asset was chosen from the library
    Selected(AssetDescriptor),
    /// A remote asset was embedded by URL
    Embedded(EmbedDescriptor),
    /// The frame closed without a completion
    Dismissed,
}

/// Error type for frame operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PickerError {
    /// More than one asset was delivered to a single-selection frame
    #[error("Frame is single-selection but {0} assets were delivered")]
    MultipleSelectionUnsupported(usize),
}

/// Modal media frame
///
/// Constructed once per edit session and reused across opens. The frame
/// itself holds no asset state; it only arbitrates which completions are
/// deliverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFrame {
    config: FrameConfig,
    open: bool,
}

impl MediaFrame {
    /// Creates a new frame with the given options
    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            open: false,
        }
    }

    /// Creates a single-selection frame
    pub fn single() -> Self {
        Self::new(FrameConfig::default())
    }

    /// Returns the frame's selection mode
    pub fn selection_mode(&self) -> SelectionMode {
        self.config.selection
    }

    /// Opens the frame
    ///
    /// Opening an already-open frame is a no-op.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the frame without delivering a completion
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true while the frame is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Delivers a direct-selection completion
    ///
    /// Closes the frame. An empty selection or a closed frame yields
    /// `Dismissed`; a single-selection frame rejects more than one asset.
    pub fn complete_selection(
        &mut self,
        mut assets: Vec<AssetDescriptor>,
    ) -> Result<PickerEvent, PickerError> {
        if !self.open {
            return Ok(PickerEvent::Dismissed);
        }
        if self.config.selection == SelectionMode::Single && assets.len() > 1 {
            return Err(PickerError::MultipleSelectionUnsupported(assets.len()));
        }
        self.open = false;

        match assets.len() {
            0 => Ok(PickerEvent::Dismissed),
            _ => Ok(PickerEvent::Selected(assets.swap_remove(0))),
        }
    }

    /// Delivers a remote-embed completion
    ///
    /// Closes the frame. A closed frame yields `Dismissed`.
    pub fn complete_embed(&mut self, embed: EmbedDescriptor) -> PickerEvent {
        if !self.open {
            return PickerEvent::Dismissed;
        }
        self.open = false;
        PickerEvent::Embedded(embed)
    }

    /// Dismisses the frame without a completion
    pub fn dismiss(&mut self) -> PickerEvent {
        self.open = false;
        PickerEvent::Dismissed
    }
}
