//! DOM contract with the hosting page.
//!
//! The page exposes two things: a list element the links are spliced
//! into, and (for the configurable-depth layout) an element carrying the
//! depth marker attribute.

use docver_core::{Depth, LinkContainer, Strategy};
use web_sys::{Document, Element};

use crate::fetch::SwitcherError;

/// Element id of the list the version links are spliced into.
pub const VERSIONS_LIST_ID: &str = "versions-list";

/// Element id carrying the depth marker attribute.
pub const DOC_OPTIONS_ID: &str = "doc-options";

/// Attribute holding the relative prefix from the document to its root.
pub const DOC_ROOT_ATTR: &str = "data-doc-root";

/// Read the depth marker from the hosting page, if it exposes one.
#[must_use]
pub fn depth_marker(document: &Document) -> Option<String> {
    document
        .get_element_by_id(DOC_OPTIONS_ID)?
        .get_attribute(DOC_ROOT_ATTR)
}

/// Pick the resolution strategy the page is laid out for.
///
/// Pages carrying a depth marker use it; pages without one are on the
/// layout where the first path segment is the version.
#[must_use]
pub fn page_strategy(document: &Document) -> Strategy {
    match depth_marker(document) {
        Some(marker) => Strategy::Marked(Depth::from_marker(&marker)),
        None => Strategy::FirstSegment,
    }
}

/// [`LinkContainer`] backed by a live DOM element.
#[derive(Debug)]
pub struct ElementContainer {
    element: Element,
}

impl ElementContainer {
    /// Wrap an element handle.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Locate the well-known versions list in `document`.
    pub fn find(document: &Document) -> Result<Self, SwitcherError> {
        document
            .get_element_by_id(VERSIONS_LIST_ID)
            .map(Self::new)
            .ok_or_else(|| SwitcherError::Dom(format!("No #{VERSIONS_LIST_ID} element in page")))
    }
}

impl LinkContainer for ElementContainer {
    fn markup(&self) -> String {
        self.element.inner_html()
    }

    fn set_markup(&mut self, markup: &str) {
        self.element.set_inner_html(markup);
    }
}
