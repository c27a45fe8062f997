//! Metadata field names shared by the widget form, the save request, and the
//! per-post store.

/// Image URL field
pub const FOOTER_SRC: &str = "footer-thumbnail-src";

/// Image title field
pub const FOOTER_TITLE: &str = "footer-thumbnail-title";

/// Image alt text field
pub const FOOTER_ALT: &str = "footer-thumbnail-alt";

/// All footer image fields, in save-handler processing order
pub const ALL: [&str; 3] = [FOOTER_SRC, FOOTER_TITLE, FOOTER_ALT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct() {
        assert_ne!(FOOTER_SRC, FOOTER_TITLE);
        assert_ne!(FOOTER_TITLE, FOOTER_ALT);
        assert_ne!(FOOTER_SRC, FOOTER_ALT);
    }

    #[test]
    fn test_all_contains_every_key() {
        assert!(ALL.contains(&FOOTER_SRC));
        assert!(ALL.contains(&FOOTER_TITLE));
        assert!(ALL.contains(&FOOTER_ALT));
    }
}
