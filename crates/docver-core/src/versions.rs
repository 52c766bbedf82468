//! Version list parsing and serialization.
//!
//! The wire format is the entire contract: one version identifier per
//! line, newline-separated UTF-8, served as `versions.txt` under the
//! documentation root.

use serde::{Deserialize, Serialize};

/// Name of the version manifest at the documentation root.
pub const VERSIONS_FILE: &str = "versions.txt";

/// An ordered list of published version identifiers.
///
/// Order is preserved from the source text and is the display order.
/// Uniqueness is an upstream invariant, not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionList(Vec<String>);

impl VersionList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse newline-delimited manifest text.
    ///
    /// Splits on `\n` and drops empty lines. A naive split would turn the
    /// manifest's trailing newline into a spurious empty identifier; that
    /// entry is deliberately filtered out, so `""` parses to an empty list.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(
            text.split('\n')
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Serialize to manifest text: newline-separated, no trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.0.join("\n")
    }

    /// Number of versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the identifiers in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Append an identifier.
    pub fn push(&mut self, version: impl Into<String>) {
        self.0.push(version.into());
    }
}

impl FromIterator<String> for VersionList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for VersionList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let list = VersionList::parse("v1\nv2\nv3");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn test_parse_drops_trailing_newline_entry() {
        let list = VersionList::parse("1.0\n2.0\n");
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["1.0", "2.0"]);
    }

    #[test]
    fn test_parse_empty_text_yields_empty_list() {
        assert!(VersionList::parse("").is_empty());
        assert!(VersionList::parse("\n\n").is_empty());
    }

    #[test]
    fn test_parse_drops_interior_blank_lines() {
        let list = VersionList::parse("1.0\n\n2.0");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_to_text_has_no_trailing_newline() {
        let list: VersionList = ["1.0", "2.0"].into_iter().collect();
        assert_eq!(list.to_text(), "1.0\n2.0");
    }

    #[test]
    fn test_text_round_trip() {
        let list: VersionList = ["1.0", "stable", "dev"].into_iter().collect();
        assert_eq!(VersionList::parse(&list.to_text()), list);
    }
}
