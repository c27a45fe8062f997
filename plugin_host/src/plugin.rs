//! Footer image plugin wiring
//!
//! The plugin's bootstrap object: constructs the renderer and save-handler
//! callbacks and registers them on the host's extension points under the
//! plugin's names.

use content_render::append_footer_image;
use footer_widget::{FooterImageWidget, WidgetConfig};
use save_handler::save_post_fields;

use crate::extension_points::{ExtensionPoints, HostError};

/// The footer image plugin
///
/// Holds the plugin identity and widget configuration; `register` wires
/// the rendering and saving callbacks into a host registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterImagePlugin {
    config: WidgetConfig,
}

impl FooterImagePlugin {
    /// Plugin identifier; prefixes every registered callback name
    pub const NAME: &'static str = "footer-image";

    /// Plugin version
    pub const VERSION: &'static str = "0.2.0";

    /// Name of the content filter callback
    pub const RENDER_CALLBACK: &'static str = "footer-image.render";

    /// Name of the save action callback
    pub const SAVE_CALLBACK: &'static str = "footer-image.save";

    /// Creates the plugin with the given widget configuration
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    /// Registers the plugin's callbacks on the host's extension points
    ///
    /// The content filter reads the saved footer image for the displayed
    /// post and appends the fragment on single-post views; the save action
    /// persists submitted fields through the save handler.
    pub fn register(&self, points: &mut ExtensionPoints) -> Result<(), HostError> {
        points.register_content_filter(
            Self::RENDER_CALLBACK,
            Box::new(|content, post_id, is_single, store| {
                let image = store.footer_image(post_id);
                append_footer_image(content, &image, is_single)
            }),
        )?;

        points.register_save_action(
            Self::SAVE_CALLBACK,
            Box::new(|store, post_id, request| save_post_fields(store, post_id, request)),
        )?;

        Ok(())
    }

    /// Creates an editor widget for one post-edit session
    pub fn widget(&self) -> FooterImageWidget {
        FooterImageWidget::new(self.config)
    }
}
