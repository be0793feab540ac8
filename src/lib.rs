//! Syndication feed build stage for static-site pipelines.
//!
//! Converts an ordered collection of content items, produced by an external
//! build orchestrator, into a serialized RSS 2.0 or Atom 1.0 document and
//! inserts it into the build's in-memory artifact set.
//!
//! A feed instance is configured once and invoked per build:
//!
//! ```ignore
//! let feed = Feed::new(FeedOptions::new("posts"))?;
//! feed.run(&mut artifacts, &meta)?;
//! let xml = &artifacts["rss.xml"];
//! ```
//!
//! The stage itself performs no I/O: input collections and site metadata are
//! already materialized by the orchestrator, and the only output is one byte
//! buffer keyed by the configured destination path.

mod assembler;
mod config;
mod error;
mod item;
pub mod logger;
mod meta;
mod resolve;
mod sink;
mod strategy;
mod utils;

pub use assembler::Feed;
pub use config::{ChannelSettings, FeedFormat, FeedOptions, GENERATOR, Limit};
pub use error::FeedError;
pub use item::{FeedItem, ItemRecord};
pub use meta::{Artifacts, BuildMeta, Collections};
pub use resolve::resolve;
pub use sink::{AtomSink, FeedSink, RssSink};
pub use strategy::{CustomElementsFn, DescriptionFn, PreprocessFn, default_description};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
