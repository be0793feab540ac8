//! Feed-level configuration merging.
//!
//! Settings are assembled from an explicit, ordered merge: site metadata
//! first, per-instance overrides second, computed defaults last. Later
//! layers overwrite earlier ones by key.

use crate::{JsonMap, error::FeedError, resolve::resolve};
use serde_json::Value;
use url::Url;

/// Tool identifier advertised in the feed's generator tag.
pub const GENERATOR: &str = "feedforge";

/// Merged feed-level configuration handed to the sink.
#[derive(Debug, Clone)]
pub struct ChannelSettings {
    pub title: String,
    pub description: String,
    pub author: Option<String>,
    pub language: Option<String>,
    /// Base site URL; relative item paths resolve against this.
    pub site_url: Url,
    /// Advertised feed self-link.
    pub feed_url: String,
    pub generator: String,
    /// Remaining merged fields, available to sinks by name
    /// (`copyright`, `ttl`, `namespaces`, ...).
    pub extra: JsonMap,
}

impl ChannelSettings {
    /// Merge site metadata with per-instance overrides and apply computed
    /// defaults.
    ///
    /// Fails before any entry is processed when the merged result has no
    /// non-empty, absolute site URL.
    pub fn merge(
        site: &JsonMap,
        overrides: &JsonMap,
        feed_url: Option<&str>,
        destination: &str,
    ) -> Result<Self, FeedError> {
        let mut merged = site.clone();
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }

        let raw_url = take_string(&mut merged, "url")
            .or_else(|| take_string(&mut merged, "site_url"))
            .ok_or(FeedError::SiteUrlRequired)?;
        let site_url = Url::parse(&raw_url).map_err(|source| FeedError::SiteUrlInvalid {
            url: raw_url,
            source,
        })?;

        let merged_feed_url = take_string(&mut merged, "feed_url");
        let feed_url = match feed_url.map(str::to_owned).or(merged_feed_url) {
            Some(explicit) => explicit,
            None => resolve(&site_url, destination)?.to_string(),
        };

        Ok(Self {
            title: take_string(&mut merged, "title").unwrap_or_default(),
            description: take_string(&mut merged, "description").unwrap_or_default(),
            author: take_string(&mut merged, "author"),
            language: take_string(&mut merged, "language"),
            site_url,
            feed_url,
            generator: GENERATOR.to_owned(),
            extra: merged,
        })
    }

    /// String field from the leftover merged fields, if present.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// Remove a non-empty string field from the map.
fn take_string(map: &mut JsonMap, key: &str) -> Option<String> {
    match map.remove(key)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> JsonMap {
        serde_json::json!({
            "title": "Geocities",
            "url": "http://example.com",
            "author": "Philodemus",
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_merge_site_fields() {
        let settings = ChannelSettings::merge(&site(), &JsonMap::new(), None, "rss.xml").unwrap();
        assert_eq!(settings.title, "Geocities");
        assert_eq!(settings.author.as_deref(), Some("Philodemus"));
        assert_eq!(settings.site_url.as_str(), "http://example.com/");
        assert_eq!(settings.generator, GENERATOR);
    }

    #[test]
    fn test_overrides_win_over_site() {
        let overrides = serde_json::json!({"title": "Neocities"})
            .as_object()
            .cloned()
            .unwrap();
        let settings = ChannelSettings::merge(&site(), &overrides, None, "rss.xml").unwrap();
        assert_eq!(settings.title, "Neocities");
        // untouched fields still come from site metadata
        assert_eq!(settings.author.as_deref(), Some("Philodemus"));
    }

    #[test]
    fn test_feed_url_derived_from_destination() {
        let settings = ChannelSettings::merge(&site(), &JsonMap::new(), None, "rss.xml").unwrap();
        assert_eq!(settings.feed_url, "http://example.com/rss.xml");
    }

    #[test]
    fn test_feed_url_explicit_override() {
        let settings = ChannelSettings::merge(
            &site(),
            &JsonMap::new(),
            Some("https://feeds.example.com/all.xml"),
            "rss.xml",
        )
        .unwrap();
        assert_eq!(settings.feed_url, "https://feeds.example.com/all.xml");
    }

    #[test]
    fn test_missing_site_url() {
        let site = serde_json::json!({"title": "No URL"})
            .as_object()
            .cloned()
            .unwrap();
        let err = ChannelSettings::merge(&site, &JsonMap::new(), None, "rss.xml").unwrap_err();
        assert!(matches!(err, FeedError::SiteUrlRequired));
    }

    #[test]
    fn test_empty_site_url() {
        let site = serde_json::json!({"url": ""}).as_object().cloned().unwrap();
        let err = ChannelSettings::merge(&site, &JsonMap::new(), None, "rss.xml").unwrap_err();
        assert!(matches!(err, FeedError::SiteUrlRequired));
    }

    #[test]
    fn test_relative_site_url_rejected() {
        let site = serde_json::json!({"url": "blog/"}).as_object().cloned().unwrap();
        let err = ChannelSettings::merge(&site, &JsonMap::new(), None, "rss.xml").unwrap_err();
        assert!(matches!(err, FeedError::SiteUrlInvalid { .. }));
    }

    #[test]
    fn test_site_url_override_key() {
        let overrides = serde_json::json!({"site_url": "https://mirror.test"})
            .as_object()
            .cloned()
            .unwrap();
        let site = JsonMap::new();
        let settings = ChannelSettings::merge(&site, &overrides, None, "rss.xml").unwrap();
        assert_eq!(settings.site_url.as_str(), "https://mirror.test/");
    }

    #[test]
    fn test_leftover_fields_kept() {
        let overrides = serde_json::json!({"copyright": "2026 Geocities", "ttl": "60"})
            .as_object()
            .cloned()
            .unwrap();
        let settings = ChannelSettings::merge(&site(), &overrides, None, "rss.xml").unwrap();
        assert_eq!(settings.extra_str("copyright"), Some("2026 Geocities"));
        assert_eq!(settings.extra_str("ttl"), Some("60"));
    }
}
