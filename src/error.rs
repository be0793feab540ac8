//! Feed stage error types.
//!
//! Expected build-time failures come back through the stage's returned
//! `Result` so the orchestrator can abort the build with a message; nothing
//! is written to the artifact set when a run fails.

use thiserror::Error;

/// Errors surfaced by feed setup or a feed stage invocation.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The `collection` option was left empty at setup time.
    #[error("`collection` option is required")]
    CollectionRequired,

    /// Build metadata carries no collections mapping (grouping stage not run).
    #[error("no collections configured - run a collection grouping stage first")]
    CollectionsNotConfigured,

    /// The named collection is missing from the collections mapping.
    #[error("collection `{0}` not found in build metadata")]
    CollectionMissing(String),

    /// Neither site metadata nor the feed options provide a site URL.
    #[error("either `site_url` or site metadata `url` must be configured")]
    SiteUrlRequired,

    /// The merged site URL is not an absolute URL.
    #[error("site url `{url}` is not an absolute url")]
    SiteUrlInvalid {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Downstream URL resolution failure, propagated as-is.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// The feed sink rejected the accumulated entries.
    #[error("feed serialization failed: {0}")]
    Sink(anyhow::Error),
}

impl From<anyhow::Error> for FeedError {
    fn from(source: anyhow::Error) -> Self {
        Self::Sink(source)
    }
}
