//! Version manifest generation.
//!
//! Writes the newline-delimited `versions.txt` the browser switcher
//! fetches. Entry order is display order: releases newest first, then the
//! convenience link names.

use std::{fs::File, io::Write, path::Path};

use docver_core::{PublishConfig, VersionList};
use thiserror::Error;
use tracing::info;

use crate::scan::VersionSet;

/// Manifest generation errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Generator for the version manifest.
#[derive(Debug)]
pub struct ManifestGenerator {
    config: PublishConfig,
}

impl ManifestGenerator {
    /// Create a new manifest generator.
    #[must_use]
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }

    /// Assemble the manifest entries for `versions`.
    ///
    /// The stable link name is included only when a stable release exists;
    /// the dev link name is always present.
    #[must_use]
    pub fn generate(&self, versions: &VersionSet) -> VersionList {
        let mut list: VersionList = versions.names().collect();

        if versions.stable().is_some() {
            list.push(self.config.links.stable.clone());
        }
        list.push(self.config.links.dev.clone());

        list
    }

    /// Write the manifest under `output_dir`.
    pub fn write(&self, versions: &VersionSet, output_dir: &Path) -> Result<()> {
        let list = self.generate(versions);
        let path = output_dir.join(&self.config.manifest.file);

        info!(path = %path.display(), entries = list.len(), "writing version manifest");

        let mut file = File::create(path)?;
        file.write_all(list.to_text().as_bytes())?;
        Ok(())
    }
}
