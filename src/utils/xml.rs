//! XML output helpers.

use std::borrow::Cow;

/// Minify XML content if enabled.
///
/// Strips leading/trailing whitespace per line and drops blank lines; the
/// serialized feed crates never emit mixed significant whitespace at line
/// boundaries, so this is safe for the documents produced here.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_xml_basic() {
        let xml = b"<?xml version=\"1.0\"?>\n<rss>\n  <channel/>\n</rss>";
        let result = minify_xml(xml, true);
        assert_eq!(&*result, b"<?xml version=\"1.0\"?><rss><channel/></rss>");
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        let xml = b"<rss>\n\n  <channel/>\n\n</rss>";
        assert_eq!(&*minify_xml(xml, true), b"<rss><channel/></rss>");
    }

    #[test]
    fn test_minify_xml_disabled() {
        let xml = b"<rss>\n  <channel/>\n</rss>";
        assert_eq!(&*minify_xml(xml, false), xml.as_slice());
    }
}
