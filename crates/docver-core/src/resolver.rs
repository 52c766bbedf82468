//! Root/page resolution for versioned documentation URLs.
//!
//! Splits an absolute page URL into the version-invariant root and the
//! version-variant page path, so that `root/<version>/page` addresses the
//! same logical document under any published version.
//!
//! Resolution is pure segment arithmetic. Malformed URLs are not detected:
//! they split like any other string and produce a nonsensical location
//! rather than an error.

use crate::segments::Segments;

/// Leading components of an absolute URL that form the origin when split
/// on `/`: the scheme ("https:"), the empty slot between the slashes, and
/// the host.
const ORIGIN_SEGMENTS: usize = 3;

/// How many trailing path segments of the current URL form the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth(usize);

impl Depth {
    /// Create a depth of at least 1.
    ///
    /// A document at the tree root is still one segment below its root
    /// directory, so depth 0 is clamped to 1.
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self(depth.max(1))
    }

    /// Parse a relative-prefix marker as emitted into the hosting page.
    ///
    /// The marker is the relative path from the current document to its
    /// tree root: `"../"` for a document one directory down, `"../../"`
    /// for two, and `"./"` (or empty) for a document at the root itself.
    /// The segment count of the marker equals the page depth; the root
    /// forms map to depth 1.
    #[must_use]
    pub fn from_marker(marker: &str) -> Self {
        if marker.is_empty() || marker == "./" {
            return Self(1);
        }
        Self::new(marker.split('/').count())
    }

    /// The number of page segments.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

/// Resolution strategy, one per deployment layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The first path segment after the origin is the version; the root is
    /// the origin and the page is everything after that segment.
    FirstSegment,

    /// A marker in the hosting page states how many trailing segments form
    /// the page. The root is the URL minus the trailing `depth + 1`
    /// segments (page plus the version segment above it).
    Marked(Depth),
}

/// A page URL split into root and page.
///
/// The root is shared by every version of the document; the page is the
/// suffix that stays constant across versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLocation {
    root: Segments,
    page: Segments,
}

impl DocLocation {
    /// Split `href` according to `strategy`.
    pub fn resolve(href: &str, strategy: Strategy) -> Self {
        let all = Segments::from_url(href);
        match strategy {
            Strategy::FirstSegment => Self {
                root: all.take_first(ORIGIN_SEGMENTS),
                page: all.skip_first(ORIGIN_SEGMENTS + 1),
            },
            Strategy::Marked(depth) => {
                let depth = depth.get();
                Self {
                    root: all.drop_last(depth + 1),
                    page: all.take_last(depth),
                }
            }
        }
    }

    /// Build a location from already-split parts (mainly for tests).
    #[must_use]
    pub fn from_parts(root: Segments, page: Segments) -> Self {
        Self { root, page }
    }

    /// The version-invariant root URL.
    #[must_use]
    pub fn root(&self) -> String {
        self.root.join()
    }

    /// The page path relative to a version directory.
    #[must_use]
    pub fn page(&self) -> String {
        self.page.join()
    }

    /// URL of the version manifest under this root.
    #[must_use]
    pub fn versions_url(&self) -> String {
        format!("{}/{}", self.root.join(), crate::versions::VERSIONS_FILE)
    }

    /// URL of this page under `version`: `root/version/page`.
    ///
    /// An empty page yields a trailing slash, which consuming links
    /// tolerate; no normalization is applied.
    #[must_use]
    pub fn version_url(&self, version: &str) -> String {
        format!("{}/{}/{}", self.root.join(), version, self.page.join())
    }
}
