//! Version manifest fetching.
//!
//! One outbound request per page load: `GET <root>/versions.txt`. There
//! is no retry, timeout, or cancellation — the request either completes
//! or is abandoned with the page.

use docver_core::{DocLocation, VersionList};
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;

/// Error type for switcher operations.
#[derive(Debug)]
pub enum SwitcherError {
    /// Network error or non-success response.
    Network(String),
    /// Required page structure missing.
    Dom(String),
}

impl std::fmt::Display for SwitcherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwitcherError::Network(e) => write!(f, "Network error: {e}"),
            SwitcherError::Dom(e) => write!(f, "Page error: {e}"),
        }
    }
}

impl From<SwitcherError> for JsValue {
    fn from(err: SwitcherError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Fetch and parse the version manifest under the location's root.
///
/// Any failure means the caller renders nothing.
pub async fn fetch_versions(location: &DocLocation) -> Result<VersionList, SwitcherError> {
    let url = location.versions_url();

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| SwitcherError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(SwitcherError::Network(format!(
            "Failed to fetch {url}: HTTP {}",
            response.status()
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| SwitcherError::Network(e.to_string()))?;

    Ok(VersionList::parse(&text))
}
