//! Ordered path-segment representation of URLs.
//!
//! URLs are split once into a segment list and joined back to a string only
//! at the boundary. All root/page arithmetic happens on whole segments.

use std::fmt;

/// An ordered list of path segments.
///
/// Splitting `"https://site.example/2.0/guide/intro.html"` yields
/// `["https:", "", "site.example", "2.0", "guide", "intro.html"]` — the
/// scheme and host occupy the first three slots of an absolute URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments(Vec<String>);

impl Segments {
    /// Create an empty segment list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a URL (or URL fragment) on `/`.
    ///
    /// An empty string yields a single empty segment, mirroring how the
    /// split behaves on every other boundary. No validation is performed;
    /// malformed input splits like any other string.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        Self(url.split('/').map(str::to_string).collect())
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `n` segments.
    #[must_use]
    pub fn take_first(&self, n: usize) -> Self {
        Self(self.0.iter().take(n).cloned().collect())
    }

    /// Everything after the first `n` segments.
    #[must_use]
    pub fn skip_first(&self, n: usize) -> Self {
        Self(self.0.iter().skip(n).cloned().collect())
    }

    /// The trailing `n` segments (all of them when `n` exceeds the length).
    #[must_use]
    pub fn take_last(&self, n: usize) -> Self {
        Self(self.0[self.0.len().saturating_sub(n)..].to_vec())
    }

    /// Everything before the trailing `n` segments.
    #[must_use]
    pub fn drop_last(&self, n: usize) -> Self {
        Self(self.0[..self.0.len().saturating_sub(n)].to_vec())
    }

    /// Serialize back to a string with `/` separators.
    #[must_use]
    pub fn join(&self) -> String {
        self.0.join("/")
    }

    /// Iterate over the segments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url_splits_on_slash() {
        let segments = Segments::from_url("https://site.example/2.0/guide/intro.html");
        assert_eq!(segments.len(), 6);
        assert_eq!(
            segments.iter().collect::<Vec<_>>(),
            vec!["https:", "", "site.example", "2.0", "guide", "intro.html"]
        );
    }

    #[test]
    fn test_join_round_trips() {
        let url = "https://site.example/2.0/guide/intro.html";
        assert_eq!(Segments::from_url(url).join(), url);
    }

    #[test]
    fn test_take_and_drop_last() {
        let segments = Segments::from_url("a/b/c/d");
        assert_eq!(segments.take_last(2).join(), "c/d");
        assert_eq!(segments.drop_last(2).join(), "a/b");
    }

    #[test]
    fn test_take_and_skip_first() {
        let segments = Segments::from_url("a/b/c/d");
        assert_eq!(segments.take_first(1).join(), "a");
        assert_eq!(segments.skip_first(3).join(), "d");
    }

    #[test]
    fn test_over_long_counts_saturate() {
        let segments = Segments::from_url("a/b");
        assert_eq!(segments.take_last(10).join(), "a/b");
        assert_eq!(segments.drop_last(10).join(), "");
        assert!(segments.skip_first(10).is_empty());
    }

    #[test]
    fn test_empty_string_is_one_blank_segment() {
        let segments = Segments::from_url("");
        assert_eq!(segments.len(), 1);
        assert!(!segments.is_empty());
        assert_eq!(segments.join(), "");
    }

    #[test]
    fn test_display_matches_join() {
        let segments = Segments::from_url("a/b/c");
        assert_eq!(segments.to_string(), segments.join());
    }
}
