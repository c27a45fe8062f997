//! Named extension points
//!
//! The host exposes two extension point families: content filters, which
//! transform rendered content, and save actions, which run on the post-save
//! path. Registration is explicit and name-checked; dispatch is in
//! registration order and recorded in the dispatch log.

use content_types::PostId;
use post_meta::MetaStore;
use save_handler::SaveRequest;
use thiserror::Error;

use crate::log::{DispatchEntry, DispatchLevel, DispatchLog};

/// Content filter callback
///
/// Receives the content so far, the post being displayed, whether this is a
/// single-post view, and read access to the metadata store. Returns the
/// (possibly transformed) content.
pub type ContentFilterFn = Box<dyn Fn(&str, PostId, bool, &MetaStore) -> String>;

/// Save action callback
///
/// Receives write access to the store, the saved post, and the submitted
/// request. Returns the store keys it wrote.
pub type SaveActionFn = Box<dyn Fn(&mut MetaStore, PostId, &SaveRequest) -> Vec<String>>;

/// Error type for extension point registration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// A callback is already registered under this name
    #[error("Callback name already registered: {0}")]
    NameAlreadyRegistered(String),
}

/// The composition root's callback registry
///
/// Owns every registered callback; there is no ambient global registry.
#[derive(Default)]
pub struct ExtensionPoints {
    content_filters: Vec<(String, ContentFilterFn)>,
    save_actions: Vec<(String, SaveActionFn)>,
    log: DispatchLog,
}

impl ExtensionPoints {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            content_filters: Vec::new(),
            save_actions: Vec::new(),
            log: DispatchLog::new(),
        }
    }

    /// Registers a content filter under a unique name
    pub fn register_content_filter(
        &mut self,
        name: impl Into<String>,
        filter: ContentFilterFn,
    ) -> Result<(), HostError> {
        let name = name.into();
        if self.has_name(&name) {
            return Err(HostError::NameAlreadyRegistered(name));
        }
        self.content_filters.push((name, filter));
        Ok(())
    }

    /// Registers a save action under a unique name
    pub fn register_save_action(
        &mut self,
        name: impl Into<String>,
        action: SaveActionFn,
    ) -> Result<(), HostError> {
        let name = name.into();
        if self.has_name(&name) {
            return Err(HostError::NameAlreadyRegistered(name));
        }
        self.save_actions.push((name, action));
        Ok(())
    }

    /// Runs all content filters over the content, in registration order
    ///
    /// Each filter receives the previous filter's output.
    pub fn apply_content_filters(
        &mut self,
        content: &str,
        post_id: PostId,
        is_single: bool,
        store: &MetaStore,
    ) -> String {
        let mut current = content.to_string();
        for (name, filter) in &self.content_filters {
            current = filter(&current, post_id, is_single, store);
            self.log.record(
                DispatchEntry::new(DispatchLevel::Debug, "content-filter", name.clone())
                    .with_field("post", post_id.to_string())
                    .with_field("single", is_single.to_string()),
            );
        }
        current
    }

    /// Runs all save actions for a submitted request, in registration order
    ///
    /// Returns every store key written, in dispatch order.
    pub fn dispatch_save(
        &mut self,
        store: &mut MetaStore,
        post_id: PostId,
        request: &SaveRequest,
    ) -> Vec<String> {
        let mut written = Vec::new();
        for (name, action) in &self.save_actions {
            let keys = action(store, post_id, request);
            self.log.record(
                DispatchEntry::new(DispatchLevel::Info, "save-action", name.clone())
                    .with_field("post", post_id.to_string())
                    .with_field("keys_written", keys.len().to_string()),
            );
            written.extend(keys);
        }
        written
    }

    /// Returns the registered content filter names, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.content_filters
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Returns the registered save action names, in order
    pub fn action_names(&self) -> Vec<&str> {
        self.save_actions
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Returns the dispatch log
    pub fn dispatch_log(&self) -> &DispatchLog {
        &self.log
    }

    fn has_name(&self, name: &str) -> bool {
        self.content_filters.iter().any(|(n, _)| n == name)
            || self.save_actions.iter().any(|(n, _)| n == name)
    }
}
