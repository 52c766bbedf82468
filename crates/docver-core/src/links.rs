//! Version link construction and list splicing.
//!
//! Maps version identifiers to list-item markup fragments and appends
//! them to a container supplied by the caller. The container is a trait
//! so rendering is testable without a live page.

use serde::{Deserialize, Serialize};

use crate::resolver::DocLocation;
use crate::versions::VersionList;

/// A rendered version link: display text plus target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionLink {
    /// Version identifier, used verbatim as the link text.
    pub version: String,

    /// Target URL: `root/version/page`.
    pub href: String,
}

impl VersionLink {
    /// Build the link for `version` at `location`.
    #[must_use]
    pub fn build(location: &DocLocation, version: &str) -> Self {
        Self {
            version: version.to_string(),
            href: location.version_url(version),
        }
    }

    /// List-item markup fragment for this link.
    ///
    /// Identifiers come from the build-controlled manifest and are not
    /// escaped.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        format!(r#"<dd><a href="{}">{}</a></dd>"#, self.href, self.version)
    }
}

/// Build one link per manifest entry, in manifest order.
#[must_use]
pub fn build_links(location: &DocLocation, versions: &VersionList) -> Vec<VersionLink> {
    versions
        .iter()
        .map(|version| VersionLink::build(location, version))
        .collect()
}

/// Handle to the host page's versions list element.
pub trait LinkContainer {
    /// Current rendered content of the container.
    fn markup(&self) -> String;

    /// Replace the container's rendered content.
    fn set_markup(&mut self, markup: &str);
}

/// Splice `links` into the container after its existing content.
///
/// Appending is additive only: existing content is kept as-is and a second
/// invocation duplicates every link. An empty link set leaves the
/// container untouched.
pub fn append_links(container: &mut dyn LinkContainer, links: &[VersionLink]) {
    if links.is_empty() {
        return;
    }

    let fragments: Vec<String> = links.iter().map(VersionLink::to_fragment).collect();
    let spliced = format!("{}\n{}", container.markup(), fragments.join("\n"));
    container.set_markup(&spliced);
}
