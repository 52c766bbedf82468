//! Docver WASM Runtime
//!
//! Browser-side version switcher using WebAssembly.
//!
//! On page load the switcher splits the current URL into a
//! version-invariant root and a page path, fetches `versions.txt` from
//! the root, and appends one link per published version to the page's
//! `#versions-list` element — each link pointing at the same page under
//! that version.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import { mountVersionSwitcher, VersionSwitcher } from 'docver-wasm';
//!
//! // One-shot: resolve, fetch, render. Failures leave the page untouched.
//! await mountVersionSwitcher();
//!
//! // Or drive it explicitly:
//! const switcher = new VersionSwitcher(window.location.href, '../');
//! const links = await switcher.links();
//! ```

pub mod dom;
pub mod fetch;
pub mod switcher;

pub use dom::{DOC_OPTIONS_ID, DOC_ROOT_ATTR, ElementContainer, VERSIONS_LIST_ID};
pub use fetch::{SwitcherError, fetch_versions};
pub use switcher::{VersionSwitcher, mount_version_switcher};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hook for better error messages in the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the switcher library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
