//! Build collaborator types: artifact set and build-wide metadata.
//!
//! Both are supplied by the external build orchestrator. The artifact set is
//! the build's in-memory output tree; a feed stage only ever inserts one
//! entry into it.

use crate::{JsonMap, item::ItemRecord};
use rustc_hash::FxHashMap;

/// In-memory artifact set of a site build: output path to byte content.
pub type Artifacts = FxHashMap<String, Vec<u8>>;

/// Ordered collections produced by an external grouping stage.
///
/// Order within each collection is the grouping stage's order and is
/// preserved through feed assembly.
pub type Collections = FxHashMap<String, Vec<ItemRecord>>;

/// Build-wide metadata supplied by the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct BuildMeta {
    /// Site-level metadata (`url`, `title`, `author`, `description`, ...).
    pub site: JsonMap,
    /// Collections mapping; `None` until a grouping stage has run.
    pub collections: Option<Collections>,
}

impl BuildMeta {
    /// Metadata with the given site fields and no collections.
    pub fn with_site(site: JsonMap) -> Self {
        Self {
            site,
            collections: None,
        }
    }
}
