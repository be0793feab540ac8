//! Pluggable per-entry strategies.
//!
//! Strategies are plain boxed closures attached to the feed options and
//! invoked per item with a fixed input/output contract. They exist because
//! content bodies may be pre-rendered in different representations and the
//! feed should not force one policy.

use crate::item::{FeedItem, ItemRecord};

/// Selects the description text for a feed entry.
pub type DescriptionFn = Box<dyn Fn(&ItemRecord) -> Option<String> + Send + Sync>;

/// Produces opaque format-extension data for a feed entry.
pub type CustomElementsFn = Box<dyn Fn(&ItemRecord) -> Option<serde_json::Value> + Send + Sync>;

/// Final per-entry override point; may add, remove, or rewrite any field.
pub type PreprocessFn = Box<dyn Fn(FeedItem) -> FeedItem + Send + Sync>;

/// Default description selection: first non-empty of `excerpt`, then
/// `contents`.
pub fn default_description(record: &ItemRecord) -> Option<String> {
    non_empty(record.excerpt.as_deref()).or_else(|| non_empty(record.contents.as_deref()))
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field.filter(|s| !s.is_empty()).map(str::to_owned)
}
