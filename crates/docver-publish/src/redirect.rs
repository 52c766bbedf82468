//! Root redirect page generation.
//!
//! The publish root itself has no content; a meta-refresh page forwards
//! visitors to the preferred version directory.

use std::{fs::File, io::Write, path::Path};

use docver_core::PublishConfig;
use thiserror::Error;
use tracing::info;

/// Redirect generation errors.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for redirect operations.
pub type Result<T> = std::result::Result<T, RedirectError>;

/// Meta-refresh page forwarding the bare root to `./<target>/index.html`.
#[must_use]
pub fn redirect_html(target: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Redirecting to documentation</title>
    <meta charset="utf-8">
    <meta http-equiv="refresh" content="0; url=./{target}/index.html">
  </head>
</html>
"#
    )
}

/// Generator for the root redirect page.
#[derive(Debug)]
pub struct RedirectGenerator {
    config: PublishConfig,
}

impl RedirectGenerator {
    /// Create a new redirect generator.
    #[must_use]
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }

    /// Write the redirect page under `output_dir`, pointing at `target`.
    ///
    /// Does nothing when redirects are disabled in the configuration.
    pub fn write(&self, target: &str, output_dir: &Path) -> Result<()> {
        if !self.config.redirect.enabled {
            return Ok(());
        }

        let path = output_dir.join(&self.config.redirect.file);
        info!(path = %path.display(), target, "writing root redirect");

        let mut file = File::create(path)?;
        file.write_all(redirect_html(target).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_html_targets_version_index() {
        let html = redirect_html("1.0");
        assert!(html.contains(r#"url=./1.0/index.html"#));
        assert!(html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_write_redirect() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let generator = RedirectGenerator::new(PublishConfig::default());
        generator.write("stable", dir.path()).expect("write");

        let html = std::fs::read_to_string(dir.path().join("index.html")).expect("read");
        assert!(html.contains("url=./stable/index.html"));
    }

    #[test]
    fn test_disabled_redirect_writes_nothing() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let mut config = PublishConfig::default();
        config.redirect.enabled = false;

        let generator = RedirectGenerator::new(config);
        generator.write("stable", dir.path()).expect("write");

        assert!(!dir.path().join("index.html").exists());
    }
}
