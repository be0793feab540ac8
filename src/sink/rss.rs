//! RSS 2.0 sink.

use super::{FeedSink, extension::build_extensions};
use crate::{config::ChannelSettings, item::FeedItem, utils::date::DateTimeUtc};
use anyhow::Result;
use rss::extension::atom::{AtomExtensionBuilder, Link};
use rss::{
    Category, CategoryBuilder, ChannelBuilder, Enclosure, EnclosureBuilder, GuidBuilder,
    ItemBuilder,
};
use serde_json::Value;
use std::collections::BTreeMap;

/// Accumulates RSS items and serializes an RSS 2.0 channel.
pub struct RssSink {
    settings: ChannelSettings,
    items: Vec<rss::Item>,
}

impl RssSink {
    pub fn new(settings: ChannelSettings) -> Self {
        Self {
            settings,
            items: Vec::new(),
        }
    }

    /// `<atom:link rel="self">` advertising the feed's own URL.
    fn self_link(&self) -> Link {
        Link {
            href: self.settings.feed_url.clone(),
            rel: "self".to_string(),
            mime_type: Some("application/rss+xml".to_string()),
            ..Link::default()
        }
    }

    /// Extra XML namespace declarations from the merged channel fields.
    fn namespaces(&self) -> BTreeMap<String, String> {
        self.settings
            .extra
            .get("namespaces")
            .and_then(Value::as_object)
            .map(|object| {
                object
                    .iter()
                    .filter_map(|(prefix, uri)| {
                        uri.as_str().map(|uri| (prefix.clone(), uri.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl FeedSink for RssSink {
    fn push(&mut self, item: FeedItem) -> Result<()> {
        self.items.push(to_rss_item(item));
        Ok(())
    }

    fn finish(&mut self) -> Result<String> {
        let settings = &self.settings;
        let channel = ChannelBuilder::default()
            .title(&settings.title)
            .link(settings.site_url.as_str())
            .description(&settings.description)
            .language(settings.language.clone())
            .generator(Some(settings.generator.clone()))
            .copyright(settings.extra_str("copyright").map(str::to_owned))
            .ttl(settings.extra_str("ttl").map(str::to_owned))
            .pub_date(settings.extra_str("pub_date").map(str::to_owned))
            .atom_ext(Some(
                AtomExtensionBuilder::default()
                    .links(vec![self.self_link()])
                    .build(),
            ))
            .namespaces(self.namespaces())
            .items(std::mem::take(&mut self.items))
            .build();

        Ok(channel.to_string())
    }
}

fn to_rss_item(item: FeedItem) -> rss::Item {
    let FeedItem {
        title,
        date,
        author,
        url,
        guid,
        description,
        custom_elements,
        extra,
    } = item;

    // The guid stays on the canonical locator even when the advertised link
    // points elsewhere.
    let guid = guid.or_else(|| url.clone()).map(|value| {
        GuidBuilder::default().permalink(true).value(value).build()
    });

    let pub_date = date.map(|d| DateTimeUtc::parse(&d).map_or(d, DateTimeUtc::to_rfc2822));

    let mut builder = ItemBuilder::default();
    builder
        .title(title)
        .link(url)
        .guid(guid)
        .description(description)
        .author(author)
        .pub_date(pub_date)
        .categories(categories(&extra))
        .enclosure(enclosure(&extra));
    if let Some(elements) = custom_elements {
        builder.extensions(build_extensions(&elements));
    }
    builder.build()
}

/// Conventional `categories` field: a list of category names.
fn categories(extra: &crate::JsonMap) -> Vec<Category> {
    extra
        .get("categories")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(|name| CategoryBuilder::default().name(name).build())
                .collect()
        })
        .unwrap_or_default()
}

/// Conventional `enclosure` field: `{url, length, type}` for media entries.
fn enclosure(extra: &crate::JsonMap) -> Option<Enclosure> {
    let object = extra.get("enclosure")?.as_object()?;
    let url = object.get("url")?.as_str()?;
    let length = match object.get("length") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };
    let mime_type = object
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Some(
        EnclosureBuilder::default()
            .url(url)
            .length(length)
            .mime_type(mime_type)
            .build(),
    )
}
