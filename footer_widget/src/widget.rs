//! Editor widget controller
//!
//! One controller instance exists per post-edit session. It owns the
//! widget view, the (lazily constructed) picker frame, and the state
//! machine that reconciles persisted metadata with picker completions.

use asset_picker::{MediaFrame, PickerEvent};
use content_types::{meta_keys, PostId};
use post_meta::MetaStore;
use save_handler::SaveRequest;

use crate::view::{FormFields, WidgetView};

/// Widget state: whether an image is currently associated with the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// No image associated (form `src` field is empty)
    Empty,
    /// An image is associated (form `src` field is non-empty)
    Set,
}

/// Widget behavior options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Map the selection channel's `caption` into the alt field instead of
    /// duplicating `title`
    ///
    /// By default the asset title is copied into both the title and alt
    /// fields and the caption goes unused, which matches long-standing
    /// widget behavior. This flag opts into the corrected mapping.
    pub map_caption_to_alt: bool,
}

/// Outcome of feeding a picker event into the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The event carried a usable URL; the widget transitioned to `Set`
    Applied,
    /// The event was blank or a dismissal; the widget is unchanged
    Ignored,
}

/// Editor widget controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterImageWidget {
    config: WidgetConfig,
    state: WidgetState,
    view: WidgetView,
    /// Memoized picker frame; constructed on first open and reused for the
    /// rest of the session
    frame: Option<MediaFrame>,
}

impl FooterImageWidget {
    /// Creates an unmounted widget in the `Empty` state
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            state: WidgetState::Empty,
            view: WidgetView::empty(),
            frame: None,
        }
    }

    /// Returns the current state
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Returns the current view
    pub fn view(&self) -> &WidgetView {
        &self.view
    }

    /// Returns true once the picker frame has been constructed
    pub fn picker_constructed(&self) -> bool {
        self.frame.is_some()
    }

    /// Loads persisted fields and reconciles the initial view
    ///
    /// If the persisted `src` is non-empty after trimming, the widget
    /// renders as if a selection had just completed: preview and remove
    /// visible, select hidden, preview attributes from the stored values.
    pub fn mount(&mut self, store: &MetaStore, post_id: PostId) {
        let image = store.footer_image(post_id);
        self.view.fields = FormFields::from_image(&image);

        if image.is_set() {
            self.state = WidgetState::Set;
            self.view.preview.src = image.src;
            self.view.preview.alt = image.alt;
            self.view.preview.title = image.title;
            self.view.reveal_image();
        } else {
            self.state = WidgetState::Empty;
            self.view.hide_image();
        }
    }

    /// Opens the picker, constructing it on first use
    ///
    /// Later opens reuse the memoized frame, so a session never holds two
    /// modal instances and completion handling attaches exactly once.
    pub fn open_picker(&mut self) -> &mut MediaFrame {
        let frame = self.frame.get_or_insert_with(MediaFrame::single);
        frame.open();
        frame
    }

    /// Feeds a picker completion into the state machine
    ///
    /// Guarded: the transition to `Set` only fires when the returned URL is
    /// non-empty after trimming. Blank URLs and dismissals leave the widget
    /// unchanged.
    pub fn apply_picker_event(&mut self, event: PickerEvent) -> SelectionOutcome {
        match event {
            PickerEvent::Selected(asset) => {
                if asset.url.trim().is_empty() {
                    return SelectionOutcome::Ignored;
                }
                let alt = if self.config.map_caption_to_alt {
                    asset.caption
                } else {
                    asset.title.clone()
                };
                self.set_image(asset.url, asset.title, alt)
            }
            PickerEvent::Embedded(embed) => {
                if embed.url.trim().is_empty() {
                    return SelectionOutcome::Ignored;
                }
                self.set_image(embed.url, embed.alt.clone(), embed.alt)
            }
            PickerEvent::Dismissed => SelectionOutcome::Ignored,
        }
    }

    /// Removes the associated image
    ///
    /// Clears all three form fields, hides the preview and remove
    /// affordance, and reveals select. This is a pure client-side reset;
    /// the store is untouched until the next save.
    pub fn remove_image(&mut self) {
        self.view.fields.clear();
        self.view.hide_image();
        self.state = WidgetState::Empty;
    }

    /// Builds the form submission the host save path would receive
    pub fn save_request(&self) -> SaveRequest {
        SaveRequest::new()
            .with_field(meta_keys::FOOTER_SRC, self.view.fields.src.clone())
            .with_field(meta_keys::FOOTER_TITLE, self.view.fields.title.clone())
            .with_field(meta_keys::FOOTER_ALT, self.view.fields.alt.clone())
    }

    /// Applies a successful completion: fields, preview, visibility, state
    fn set_image(&mut self, src: String, title: String, alt: String) -> SelectionOutcome {
        self.view.fields.src = src;
        self.view.fields.title = title;
        self.view.fields.alt = alt;

        self.view.preview.src = self.view.fields.src.clone();
        self.view.preview.alt = self.view.fields.alt.clone();
        self.view.preview.title = self.view.fields.title.clone();

        self.view.reveal_image();
        self.state = WidgetState::Set;
        SelectionOutcome::Applied
    }
}
