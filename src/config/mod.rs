//! Feed instance configuration.
//!
//! Declarative options deserialize from the host's site configuration
//! (TOML/JSON); strategy closures are attached programmatically and skipped
//! by serde.

mod settings;

pub use settings::{ChannelSettings, GENERATOR};

use crate::{
    JsonMap,
    strategy::{CustomElementsFn, DescriptionFn, PreprocessFn},
};
use serde::{Deserialize, Deserializer, de};
use std::fmt;

/// Feed output format.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

/// Maximum number of entries included in a feed.
///
/// Deserializes from an integer cap or a disabled marker: `0` and `false`
/// both mean unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Keep the first N entries of the collection.
    Capped(usize),
    /// Include every entry.
    Unlimited,
}

impl Limit {
    /// Number of entries to keep out of `available`.
    pub fn cap(self, available: usize) -> usize {
        match self {
            Self::Capped(n) => available.min(n),
            Self::Unlimited => available,
        }
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::Capped(20)
    }
}

impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LimitVisitor;

        impl de::Visitor<'_> for LimitVisitor {
            type Value = Limit;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an entry cap, or `0`/`false` for unlimited")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Limit, E> {
                if v == 0 {
                    Ok(Limit::Unlimited)
                } else {
                    Ok(Limit::Capped(v as usize))
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Limit, E> {
                if v < 0 {
                    return Err(E::invalid_value(de::Unexpected::Signed(v), &self));
                }
                self.visit_u64(v as u64)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Limit, E> {
                if v {
                    Ok(Limit::default())
                } else {
                    Ok(Limit::Unlimited)
                }
            }
        }

        deserializer.deserialize_any(LimitVisitor)
    }
}

/// Per-instance feed configuration.
///
/// One `FeedOptions` describes one output feed; a build may configure several
/// instances with distinct collections and destinations.
#[derive(Deserialize)]
#[serde(default)]
pub struct FeedOptions {
    /// Name of the collection to read. Required; setup fails when empty.
    pub collection: String,
    /// Output artifact path.
    pub destination: String,
    /// Entry cap (default 20; `0`/`false` for unlimited).
    pub limit: Limit,
    /// Output format: rss | atom.
    pub format: FeedFormat,
    /// Strip inter-element whitespace from the serialized document.
    pub minify: bool,
    /// Feed-level field overrides merged over site metadata
    /// (`title`, `url`, `description`, `author`, ...).
    pub channel: JsonMap,
    /// Advertised feed self-link. Derived from the site URL and destination
    /// when absent.
    pub feed_url: Option<String>,
    /// Description selection override (default: excerpt, then contents).
    #[serde(skip)]
    pub description: Option<DescriptionFn>,
    /// Optional per-entry format-extension producer.
    #[serde(skip)]
    pub custom_elements: Option<CustomElementsFn>,
    /// Final per-entry override, applied after all field mapping.
    #[serde(skip)]
    pub preprocess: Option<PreprocessFn>,
}

impl FeedOptions {
    /// Options reading `collection`, with defaults for everything else.
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Self::default()
        }
    }
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            collection: String::new(),
            destination: "rss.xml".into(),
            limit: Limit::default(),
            format: FeedFormat::Rss,
            minify: false,
            channel: JsonMap::new(),
            feed_url: None,
            description: None,
            custom_elements: None,
            preprocess: None,
        }
    }
}

impl fmt::Debug for FeedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedOptions")
            .field("collection", &self.collection)
            .field("destination", &self.destination)
            .field("limit", &self.limit)
            .field("format", &self.format)
            .field("minify", &self.minify)
            .field("channel", &self.channel)
            .field("feed_url", &self.feed_url)
            .field("description", &self.description.is_some())
            .field("custom_elements", &self.custom_elements.is_some())
            .field("preprocess", &self.preprocess.is_some())
            .finish()
    }
}
