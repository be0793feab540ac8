//! Content item records and assembled feed entries.

use crate::JsonMap;
use serde::{Deserialize, Serialize};

/// One content unit from a build collection.
///
/// # Standard Fields
///
/// | Field      | Type     | Description                                    |
/// |------------|----------|------------------------------------------------|
/// | `title`    | `String` | Entry title                                    |
/// | `date`     | `String` | Publication date                               |
/// | `author`   | `String` | Author name                                    |
/// | `path`     | `String` | Output path relative to the site root          |
/// | `url`      | `String` | Explicit locator, takes precedence over `path` |
/// | `link`     | `String` | External destination overriding the locator    |
/// | `excerpt`  | `String` | Pre-rendered summary                           |
/// | `contents` | `String` | Raw rendered body                              |
///
/// # Custom Fields (`extra`)
///
/// Any additional fields are captured in `extra` as raw JSON and forwarded
/// to the feed sink untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    /// Output path relative to the site root; source for the canonical locator.
    pub path: Option<String>,
    /// Explicit locator. When present, `path` is ignored.
    pub url: Option<String>,
    /// External destination advertised as the entry's primary link.
    pub link: Option<String>,
    /// Pre-rendered summary, preferred description source.
    pub excerpt: Option<String>,
    /// Raw rendered body, fallback description source.
    pub contents: Option<String>,
    /// Additional user-defined fields, passed through opaquely.
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// A fully assembled feed entry, ready for sink submission.
///
/// Constructed fresh per build invocation and discarded once the document is
/// serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedItem {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    /// Primary link: the canonical locator, or the external `link` when one
    /// was supplied.
    pub url: Option<String>,
    /// Stable per-site identifier, set when `url` was swapped to an external
    /// link.
    pub guid: Option<String>,
    /// Selected description text.
    pub description: Option<String>,
    /// Opaque format-extension structure from the custom-elements extender.
    pub custom_elements: Option<serde_json::Value>,
    /// Unrecognized item fields, available to the sink by name.
    pub extra: JsonMap,
}

impl FeedItem {
    /// Candidate entry from a raw record, preserving opaque fields.
    pub(crate) fn from_record(record: &ItemRecord) -> Self {
        Self {
            title: record.title.clone(),
            date: record.date.clone(),
            author: record.author.clone(),
            url: record.url.clone(),
            guid: None,
            description: None,
            custom_elements: None,
            extra: record.extra.clone(),
        }
    }
}
