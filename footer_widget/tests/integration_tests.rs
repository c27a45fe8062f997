//! Integration tests for the footer image widget
//!
//! These tests validate complete editor-session workflows: mounting against
//! persisted metadata, picking and removing images, and producing the save
//! request that makes the session durable.

use asset_picker::PickerEvent;
use content_types::{meta_keys, AssetDescriptor, EmbedDescriptor, FooterImage, PostId};
use footer_widget::{FooterImageWidget, SelectionOutcome, WidgetConfig, WidgetState};
use post_meta::MetaStore;
use save_handler::save_post_fields;

#[test]
fn test_mount_with_persisted_image() {
    // A post that already has a footer image mounts straight into Set.
    let mut store = MetaStore::new();
    let post_id = PostId::new();
    store.set_footer_image(post_id, &FooterImage::new("http://x/img.png", "Title", "Alt"));

    let mut widget = FooterImageWidget::new(WidgetConfig::default());
    widget.mount(&store, post_id);

    assert_eq!(widget.state(), WidgetState::Set);
    let view = widget.view();
    assert!(view.preview_visible);
    assert!(view.remove_visible);
    assert!(!view.select_visible);
    assert_eq!(view.preview.src, "http://x/img.png");
    assert_eq!(view.preview.alt, "Alt");
    assert_eq!(view.preview.title, "Title");
    assert_eq!(view.fields.src, "http://x/img.png");
}

#[test]
fn test_mount_without_persisted_image() {
    let store = MetaStore::new();
    let post_id = PostId::new();

    let mut widget = FooterImageWidget::new(WidgetConfig::default());
    widget.mount(&store, post_id);

    assert_eq!(widget.state(), WidgetState::Empty);
    assert!(widget.view().select_visible);
    assert!(!widget.view().preview_visible);
    assert!(!widget.view().remove_visible);
}

#[test]
fn test_mount_with_whitespace_src_is_empty() {
    let mut store = MetaStore::new();
    let post_id = PostId::new();
    store.set(post_id, meta_keys::FOOTER_SRC, "   ");

    let mut widget = FooterImageWidget::new(WidgetConfig::default());
    widget.mount(&store, post_id);

    assert_eq!(widget.state(), WidgetState::Empty);
}

#[test]
fn test_select_then_save_persists_fields() {
    let mut store = MetaStore::new();
    let post_id = PostId::new();

    let mut widget = FooterImageWidget::new(WidgetConfig::default());
    widget.mount(&store, post_id);

    // Open the picker and select an asset.
    let frame = widget.open_picker();
    assert!(frame.is_open());
    let event = frame
        .complete_selection(vec![AssetDescriptor::new("http://x/a.png", "T", "C")])
        .unwrap();
    assert_eq!(widget.apply_picker_event(event), SelectionOutcome::Applied);

    // Nothing is durable yet.
    assert!(!store.footer_image(post_id).is_set());

    // The ordinary save path makes the selection durable.
    save_post_fields(&mut store, post_id, &widget.save_request());
    assert_eq!(
        store.footer_image(post_id),
        FooterImage::new("http://x/a.png", "T", "T")
    );
}

#[test]
fn test_blank_completion_leaves_widget_unchanged() {
    let mut widget = FooterImageWidget::new(WidgetConfig::default());

    let frame = widget.open_picker();
    let event = frame
        .complete_selection(vec![AssetDescriptor::new("   ", "T", "C")])
        .unwrap();

    assert_eq!(widget.apply_picker_event(event), SelectionOutcome::Ignored);
    assert_eq!(widget.state(), WidgetState::Empty);
    assert!(widget.view().select_visible);
}

#[test]
fn test_remove_is_client_side_until_saved() {
    let mut store = MetaStore::new();
    let post_id = PostId::new();
    store.set_footer_image(post_id, &FooterImage::new("http://x/img.png", "T", "A"));

    let mut widget = FooterImageWidget::new(WidgetConfig::default());
    widget.mount(&store, post_id);
    widget.remove_image();

    // The store still holds the old values until the post is saved.
    assert!(store.footer_image(post_id).is_set());

    save_post_fields(&mut store, post_id, &widget.save_request());
    assert!(!store.footer_image(post_id).is_set());
    assert_eq!(store.footer_image(post_id), FooterImage::empty());
}

#[test]
fn test_picker_reuse_across_opens() {
    let mut widget = FooterImageWidget::new(WidgetConfig::default());

    // First open constructs the frame; a dismissal closes it.
    let event = widget.open_picker().dismiss();
    assert_eq!(widget.apply_picker_event(event), SelectionOutcome::Ignored);

    // Second open reuses the same memoized instance and still completes.
    let frame = widget.open_picker();
    let event = frame
        .complete_selection(vec![AssetDescriptor::new("http://x/b.png", "B", "")])
        .unwrap();
    assert_eq!(widget.apply_picker_event(event), SelectionOutcome::Applied);
    assert_eq!(widget.view().fields.src, "http://x/b.png");
}

#[test]
fn test_embed_workflow() {
    let mut store = MetaStore::new();
    let post_id = PostId::new();

    let mut widget = FooterImageWidget::new(WidgetConfig::default());
    widget.mount(&store, post_id);

    let frame = widget.open_picker();
    let event = frame.complete_embed(EmbedDescriptor::new("http://remote/pic.png", "Remote alt"));
    assert_eq!(widget.apply_picker_event(event), SelectionOutcome::Applied);

    save_post_fields(&mut store, post_id, &widget.save_request());
    assert_eq!(
        store.footer_image(post_id),
        FooterImage::new("http://remote/pic.png", "Remote alt", "Remote alt")
    );
}

#[test]
fn test_full_session_select_remove_reselect() {
    let mut store = MetaStore::new();
    let post_id = PostId::new();

    let mut widget = FooterImageWidget::new(WidgetConfig::default());
    widget.mount(&store, post_id);

    let event = widget
        .open_picker()
        .complete_selection(vec![AssetDescriptor::new("http://x/a.png", "A", "")])
        .unwrap();
    widget.apply_picker_event(event);
    assert_eq!(widget.state(), WidgetState::Set);

    widget.remove_image();
    assert_eq!(widget.state(), WidgetState::Empty);

    let event = widget
        .open_picker()
        .complete_selection(vec![AssetDescriptor::new("http://x/b.png", "B", "")])
        .unwrap();
    widget.apply_picker_event(event);

    save_post_fields(&mut store, post_id, &widget.save_request());
    assert_eq!(store.get(post_id, meta_keys::FOOTER_SRC), "http://x/b.png");
    assert_eq!(store.get(post_id, meta_keys::FOOTER_TITLE), "B");
}
