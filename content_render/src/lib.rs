//! # Content Renderer
//!
//! Appends the footer image fragment to rendered post content.
//!
//! The fragment layout is a compatibility contract: a wrapping block element
//! with identifier `footer-thumbnail` containing one image element whose
//! `src`, `alt`, and `title` attributes carry the stored values verbatim.
//! No escaping is applied beyond what the host templating guarantees, and
//! no other content transformation occurs.

use content_types::FooterImage;

/// Appends the footer image fragment to post content
///
/// Returns the content unchanged when the view is not a single-post view or
/// when no image is set (empty or whitespace-only `src`). Otherwise returns
/// the content with exactly one fragment appended.
pub fn append_footer_image(content: &str, image: &FooterImage, is_single: bool) -> String {
    if !is_single || !image.is_set() {
        return content.to_string();
    }

    let mut rendered = String::with_capacity(content.len() + 96);
    rendered.push_str(content);
    rendered.push_str(&footer_fragment(image));
    rendered
}

/// Builds the footer fragment for a set image
///
/// Attribute values are inserted verbatim; malformed URLs are rendered
/// as-is (deliberate permissiveness).
pub fn footer_fragment(image: &FooterImage) -> String {
    format!(
        "<div id=\"footer-thumbnail\"><img src=\"{}\" alt=\"{}\" title=\"{}\" /></div>",
        image.src, image.alt, image.title
    )
}
