//! Browser entry points for the version switcher.

use docver_core::{Depth, DocLocation, Strategy, append_links, build_links};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{Document, Element};

use crate::{
    dom::{self, ElementContainer},
    fetch::{SwitcherError, fetch_versions},
};

/// Version switcher bound to one resolved page location.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct VersionSwitcher {
    location: DocLocation,
}

#[wasm_bindgen]
impl VersionSwitcher {
    /// Create a switcher for `href`.
    ///
    /// With a depth marker the configurable-depth layout is used; without
    /// one the first path segment is taken as the version.
    #[wasm_bindgen(constructor)]
    pub fn new(href: &str, marker: Option<String>) -> VersionSwitcher {
        let strategy = match marker {
            Some(marker) => Strategy::Marked(Depth::from_marker(&marker)),
            None => Strategy::FirstSegment,
        };

        Self {
            location: DocLocation::resolve(href, strategy),
        }
    }

    /// Create a switcher from the live window location and page markup.
    #[wasm_bindgen(js_name = fromWindow)]
    pub fn from_window() -> Result<VersionSwitcher, JsValue> {
        let (document, href) = live_page()?;
        Ok(Self {
            location: DocLocation::resolve(&href, dom::page_strategy(&document)),
        })
    }

    /// The version-invariant root URL.
    #[must_use]
    pub fn root(&self) -> String {
        self.location.root()
    }

    /// The page path below a version directory.
    #[must_use]
    pub fn page(&self) -> String {
        self.location.page()
    }

    /// URL of the manifest this switcher fetches.
    #[wasm_bindgen(js_name = versionsUrl)]
    #[must_use]
    pub fn versions_url(&self) -> String {
        self.location.versions_url()
    }

    /// Fetch the manifest and resolve `{version, href}` records.
    ///
    /// Resolves to an array in manifest order.
    pub fn links(&self) -> js_sys::Promise {
        let location = self.location.clone();
        future_to_promise(async move {
            let versions = fetch_versions(&location).await?;
            let links = build_links(&location, &versions);
            serde_wasm_bindgen::to_value(&links).map_err(|e| JsValue::from_str(&e.to_string()))
        })
    }

    /// Fetch the manifest and splice the links into `container`.
    ///
    /// Splicing is additive: calling this twice duplicates the links.
    #[wasm_bindgen(js_name = renderInto)]
    pub fn render_into(&self, container: Element) -> js_sys::Promise {
        let location = self.location.clone();
        future_to_promise(async move {
            let versions = fetch_versions(&location).await?;
            let links = build_links(&location, &versions);

            let mut container = ElementContainer::new(container);
            append_links(&mut container, &links);
            Ok(JsValue::UNDEFINED)
        })
    }
}

/// One-shot page-load entry point.
///
/// Resolves the current page, fetches the manifest, and splices the links
/// into the `#versions-list` element. Every failure is swallowed — the
/// page keeps working without version links.
#[wasm_bindgen(js_name = mountVersionSwitcher)]
pub async fn mount_version_switcher() {
    let _ = mount().await;
}

async fn mount() -> Result<(), SwitcherError> {
    let (document, href) = live_page()?;
    let location = DocLocation::resolve(&href, dom::page_strategy(&document));

    let versions = fetch_versions(&location).await?;
    let links = build_links(&location, &versions);

    let mut container = ElementContainer::find(&document)?;
    append_links(&mut container, &links);
    Ok(())
}

/// The live document and its href.
fn live_page() -> Result<(Document, String), SwitcherError> {
    let window = web_sys::window().ok_or_else(|| SwitcherError::Dom("No window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| SwitcherError::Dom("No document".to_string()))?;
    let href = window
        .location()
        .href()
        .map_err(|_| SwitcherError::Dom("No location href".to_string()))?;
    Ok((document, href))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_construction() {
        let switcher = VersionSwitcher::new(
            "https://site.example/2.0/guide/intro.html",
            Some("../".to_string()),
        );

        assert_eq!(switcher.root(), "https://site.example");
        assert_eq!(switcher.page(), "guide/intro.html");
        assert_eq!(switcher.versions_url(), "https://site.example/versions.txt");
    }

    #[test]
    fn test_first_segment_construction() {
        let switcher = VersionSwitcher::new("https://site.example/2.0/guide/intro.html", None);

        assert_eq!(switcher.root(), "https://site.example");
        assert_eq!(switcher.page(), "guide/intro.html");
    }

    #[test]
    fn test_root_marker_construction() {
        let switcher =
            VersionSwitcher::new("https://site.example/2.0/intro.html", Some("./".to_string()));

        assert_eq!(switcher.page(), "intro.html");
    }
}
