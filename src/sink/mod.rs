//! Feed sinks (RSS, Atom).
//!
//! A sink is the serialization capability that turns accumulated feed
//! entries into a final document. The built-in sinks cover:
//!
//! - **RSS 2.0**: Standard feed format (`rss.xml`)
//! - **Atom 1.0**: Modern feed format (`atom.xml`)
//!
//! The trait is public so hosts can substitute their own capability, e.g. a
//! recording sink in tests or a JSON Feed serializer.

mod atom;
mod extension;
mod rss;

pub use atom::AtomSink;
pub use rss::RssSink;

use crate::{
    config::{ChannelSettings, FeedFormat},
    item::FeedItem,
};
use anyhow::Result;

/// A serialization capability accepting per-entry submissions.
///
/// Entries arrive in collection order (after limiting) and the document is
/// produced once, on `finish`.
pub trait FeedSink {
    /// Accept one assembled entry.
    fn push(&mut self, item: FeedItem) -> Result<()>;

    /// Serialize the accumulated entries into an XML document.
    fn finish(&mut self) -> Result<String>;
}

impl FeedFormat {
    /// Open a sink for this format with the merged channel settings.
    pub fn open(&self, settings: &ChannelSettings) -> Box<dyn FeedSink> {
        match self {
            Self::Rss => Box::new(RssSink::new(settings.clone())),
            Self::Atom => Box::new(AtomSink::new(settings.clone())),
        }
    }
}
