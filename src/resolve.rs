//! Absolute URL resolution against the site base.

use url::Url;

/// Resolve a possibly-relative target against a base absolute URL.
///
/// Standard URL-resolution semantics apply: relative paths join onto the
/// base, query strings and fragments are carried over, and absolute targets
/// pass through unchanged. Malformed targets surface whatever error the URL
/// library reports; no re-validation happens here.
pub fn resolve(base: &Url, target: &str) -> Result<Url, url::ParseError> {
    base.join(target)
}
