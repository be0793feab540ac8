//! Atom 1.0 sink.

use super::FeedSink;
use crate::{config::ChannelSettings, item::FeedItem, utils::date::DateTimeUtc};
use anyhow::Result;
use atom_syndication::{
    Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder,
    Person, PersonBuilder, Text,
};

/// Accumulates Atom entries and serializes an Atom 1.0 feed.
pub struct AtomSink {
    settings: ChannelSettings,
    entries: Vec<Entry>,
}

impl AtomSink {
    pub fn new(settings: ChannelSettings) -> Self {
        Self {
            settings,
            entries: Vec::new(),
        }
    }
}

impl FeedSink for AtomSink {
    fn push(&mut self, item: FeedItem) -> Result<()> {
        self.entries.push(to_atom_entry(item));
        Ok(())
    }

    fn finish(&mut self) -> Result<String> {
        let settings = &self.settings;

        // Feed updated: most recent entry date.
        let updated = self
            .entries
            .iter()
            .map(|entry| *entry.updated())
            .max()
            .unwrap_or_default();

        let self_link: Link = LinkBuilder::default()
            .href(settings.feed_url.clone())
            .rel("self".to_string())
            .mime_type(Some("application/atom+xml".to_string()))
            .build();
        let alternate_link: Link = LinkBuilder::default()
            .href(settings.site_url.to_string())
            .rel("alternate".to_string())
            .build();

        let authors: Vec<Person> = settings
            .author
            .clone()
            .map(|name| vec![PersonBuilder::default().name(name).build()])
            .unwrap_or_default();

        let subtitle = (!settings.description.is_empty())
            .then(|| Text::plain(settings.description.clone()));

        let feed: Feed = FeedBuilder::default()
            .title(Text::plain(settings.title.clone()))
            .id(settings.site_url.to_string())
            .updated(updated)
            .authors(authors)
            .links(vec![self_link, alternate_link])
            .subtitle(subtitle)
            .generator(Some(
                GeneratorBuilder::default()
                    .value(settings.generator.clone())
                    .build(),
            ))
            .lang(settings.language.clone())
            .entries(std::mem::take(&mut self.entries))
            .build();

        Ok(feed.to_string())
    }
}

fn to_atom_entry(item: FeedItem) -> Entry {
    let updated = parse_updated(item.date.as_deref()).unwrap_or_default();

    // The stable identifier survives the link/guid swap: prefer guid, then
    // the advertised link.
    let id = item
        .guid
        .clone()
        .or_else(|| item.url.clone())
        .unwrap_or_default();

    let links: Vec<Link> = item
        .url
        .as_ref()
        .map(|url| {
            vec![
                LinkBuilder::default()
                    .href(url.clone())
                    .rel("alternate".to_string())
                    .build(),
            ]
        })
        .unwrap_or_default();

    let authors: Vec<Person> = item
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    EntryBuilder::default()
        .title(Text::plain(item.title.clone().unwrap_or_default()))
        .id(id)
        .updated(updated)
        .links(links)
        .summary(item.description.clone().map(Text::html))
        .authors(authors)
        .build()
}

/// Entry timestamp: ISO forms via `DateTimeUtc`, then whatever the datetime
/// library itself accepts, else the epoch.
fn parse_updated(date: Option<&str>) -> Option<FixedDateTime> {
    let date = date?;
    if let Some(dt) = DateTimeUtc::parse(date) {
        return dt.to_rfc3339().parse().ok();
    }
    date.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonMap;
    use url::Url;

    fn settings() -> ChannelSettings {
        ChannelSettings {
            title: "Test Blog".to_string(),
            description: "A test blog".to_string(),
            author: Some("Test Author".to_string()),
            language: None,
            site_url: Url::parse("https://example.com").unwrap(),
            feed_url: "https://example.com/atom.xml".to_string(),
            generator: "feedforge".to_string(),
            extra: JsonMap::new(),
        }
    }

    #[test]
    fn test_entry_basic() {
        let entry = to_atom_entry(FeedItem {
            title: Some("Test Post".to_string()),
            date: Some("2024-01-15".to_string()),
            url: Some("https://example.com/test/".to_string()),
            description: Some("A test summary".to_string()),
            ..Default::default()
        });
        assert_eq!(entry.title().as_str(), "Test Post");
        assert_eq!(entry.id(), "https://example.com/test/");
        assert!(entry.updated().to_rfc3339().starts_with("2024-01-15"));
    }

    #[test]
    fn test_entry_id_prefers_guid() {
        let entry = to_atom_entry(FeedItem {
            url: Some("https://theory.com/juice/".to_string()),
            guid: Some("https://example.com/post.html".to_string()),
            ..Default::default()
        });
        assert_eq!(entry.id(), "https://example.com/post.html");
        assert_eq!(entry.links()[0].href(), "https://theory.com/juice/");
    }

    #[test]
    fn test_entry_invalid_date_defaults() {
        let entry = to_atom_entry(FeedItem {
            date: Some("around noon".to_string()),
            ..Default::default()
        });
        assert_eq!(*entry.updated(), FixedDateTime::default());
    }

    #[test]
    fn test_finish_feed_updated_is_max_entry_date() {
        let mut sink = AtomSink::new(settings());
        for date in ["2024-01-15", "2024-06-15", "2024-03-01"] {
            sink.push(FeedItem {
                date: Some(date.to_string()),
                url: Some(format!("https://example.com/{date}/")),
                ..Default::default()
            })
            .unwrap();
        }
        let xml = sink.finish().unwrap();

        assert!(xml.contains("<title>Test Blog</title>"));
        assert!(xml.contains("2024-06-15T00:00:00"));
        assert!(xml.contains(r#"rel="self""#));
        assert!(xml.contains("https://example.com/atom.xml"));
    }
}
