//! The feed assembly stage.
//!
//! Orchestrates one feed per instance: merges feed-level configuration,
//! walks the named collection in order, applies the per-entry field-mapping
//! rules, and inserts the serialized document into the build's artifact set.

use crate::{
    config::{ChannelSettings, FeedOptions},
    debug,
    error::FeedError,
    item::{FeedItem, ItemRecord},
    log,
    meta::{Artifacts, BuildMeta},
    resolve::resolve,
    strategy::default_description,
    utils::{plural::plural_count, xml::minify_xml},
};


/// A configured feed stage.
///
/// One instance per output feed; a single build may run several instances
/// with distinct collections and destinations. Instances are independent and
/// never inspect each other's configuration, so distinct destination paths
/// are the orchestrator's responsibility - with colliding destinations the
/// last invocation wins.
#[derive(Debug)]
pub struct Feed {
    options: FeedOptions,
}

impl Feed {
    /// Validate options and construct the stage.
    ///
    /// Fails immediately when no collection is named: that is a setup
    /// mistake, not a build-time condition, so it surfaces before any build
    /// activity.
    pub fn new(options: FeedOptions) -> Result<Self, FeedError> {
        if options.collection.is_empty() {
            return Err(FeedError::CollectionRequired);
        }
        Ok(Self { options })
    }

    /// Assemble the feed and insert it into the artifact set.
    ///
    /// The returned result is the stage's completion signal: expected
    /// failures come back as `FeedError` values, and the artifact set stays
    /// untouched on any failure.
    pub fn run(&self, artifacts: &mut Artifacts, meta: &BuildMeta) -> Result<(), FeedError> {
        let collections = meta
            .collections
            .as_ref()
            .ok_or(FeedError::CollectionsNotConfigured)?;

        let settings = ChannelSettings::merge(
            &meta.site,
            &self.options.channel,
            self.options.feed_url.as_deref(),
            &self.options.destination,
        )?;

        debug!("feed"; "channel settings for {}: {:?}", self.options.destination, settings);

        let collection = collections
            .get(&self.options.collection)
            .ok_or_else(|| FeedError::CollectionMissing(self.options.collection.clone()))?;

        let count = self.options.limit.cap(collection.len());
        let mut sink = self.options.format.open(&settings);
        for record in &collection[..count] {
            let item = self.assemble(record, &settings)?;
            sink.push(item)?;
        }

        let xml = sink.finish()?;
        let bytes = minify_xml(xml.as_bytes(), self.options.minify).into_owned();
        artifacts.insert(self.options.destination.clone(), bytes);

        log!("feed"; "{} ({})", self.options.destination, plural_count(count, "item"));
        Ok(())
    }

    /// Apply the per-entry field-mapping rules, in order.
    fn assemble(
        &self,
        record: &ItemRecord,
        settings: &ChannelSettings,
    ) -> Result<FeedItem, FeedError> {
        let mut item = FeedItem::from_record(record);

        item.description = match &self.options.description {
            Some(select) => select(record),
            None => default_description(record),
        };
        if let Some(extend) = &self.options.custom_elements {
            item.custom_elements = extend(record);
        }

        // Canonical locator: an explicit url wins, else derive from path.
        if item.url.is_none() {
            if let Some(path) = &record.path {
                item.url = Some(resolve(&settings.site_url, path)?.to_string());
            }
        }

        // External link: the canonical locator stays behind as the stable
        // guid, the external destination becomes the advertised link.
        if let Some(link) = &record.link {
            item.guid = item.url.take();
            item.url = Some(link.clone());
        }

        if let Some(preprocess) = &self.options.preprocess {
            item = preprocess(item);
        }
        Ok(item)
    }
}
