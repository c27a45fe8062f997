//! Widget-visible UI surface
//!
//! The widget manipulates four addressable elements on the host editor
//! page: the select affordance, the preview image, the remove affordance,
//! and the three hidden form fields. This module models them as plain
//! structured state; the host decides actual presentation.

use content_types::FooterImage;

/// Attributes of the preview image element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewAttrs {
    pub src: String,
    pub alt: String,
    pub title: String,
}

/// The three hidden form fields
///
/// This is the transient, unsaved copy of the post's footer image values;
/// it becomes durable only through the post-save path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub src: String,
    pub title: String,
    pub alt: String,
}

impl FormFields {
    /// Creates form fields from persisted values
    pub fn from_image(image: &FooterImage) -> Self {
        Self {
            src: image.src.clone(),
            title: image.title.clone(),
            alt: image.alt.clone(),
        }
    }

    /// Converts the fields back into the value type
    pub fn to_image(&self) -> FooterImage {
        FooterImage::new(self.src.clone(), self.title.clone(), self.alt.clone())
    }

    /// Resets all three fields to empty strings
    pub fn clear(&mut self) {
        self.src.clear();
        self.title.clear();
        self.alt.clear();
    }
}

/// The widget's visible state
///
/// Invariant: exactly one of the select and remove affordances is visible
/// at any time, and preview visibility always equals remove visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    /// "Select image" affordance visibility
    pub select_visible: bool,
    /// Preview image visibility
    pub preview_visible: bool,
    /// "Remove image" affordance visibility
    pub remove_visible: bool,
    /// Preview image attributes
    pub preview: PreviewAttrs,
    /// Hidden form fields
    pub fields: FormFields,
}

impl WidgetView {
    /// Creates the view for a post with no image: select shown, the rest
    /// hidden
    pub fn empty() -> Self {
        Self {
            select_visible: true,
            preview_visible: false,
            remove_visible: false,
            preview: PreviewAttrs::default(),
            fields: FormFields::default(),
        }
    }

    /// Reveals the preview and remove affordance, hides select
    pub fn reveal_image(&mut self) {
        self.select_visible = false;
        self.preview_visible = true;
        self.remove_visible = true;
    }

    /// Hides the preview and remove affordance, reveals select
    pub fn hide_image(&mut self) {
        self.select_visible = true;
        self.preview_visible = false;
        self.remove_visible = false;
    }
}

impl Default for WidgetView {
    fn default() -> Self {
        Self::empty()
    }
}
