//! Publish-directory scanning.
//!
//! Walks the immediate children of a publish directory and collects the
//! ones named like release tags. Convenience links and asset directories
//! are skipped silently.

use std::{fs, path::Path};

use thiserror::Error;
use tracing::debug;

use crate::release::ReleaseVersion;

/// Scan errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Release versions discovered in a publish directory, newest first.
#[derive(Debug, Clone, Default)]
pub struct VersionSet {
    releases: Vec<ReleaseVersion>,
}

impl VersionSet {
    /// Scan `dir` for version directories.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut releases = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            match ReleaseVersion::parse(name) {
                Some(release) => {
                    debug!(version = name, "found published version");
                    releases.push(release);
                }
                None => debug!(dir = name, "skipping non-release directory"),
            }
        }

        Ok(Self::from_releases(releases))
    }

    /// Build a set from already-parsed releases.
    #[must_use]
    pub fn from_releases(mut releases: Vec<ReleaseVersion>) -> Self {
        releases.sort();
        releases.reverse();
        Self { releases }
    }

    /// The releases, newest first.
    #[must_use]
    pub fn releases(&self) -> &[ReleaseVersion] {
        &self.releases
    }

    /// The newest non-pre-release version, if any.
    #[must_use]
    pub fn stable(&self) -> Option<&ReleaseVersion> {
        self.releases.iter().find(|r| !r.is_prerelease())
    }

    /// Release names, newest first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.releases.iter().map(ReleaseVersion::name)
    }

    /// Number of releases found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether no releases were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
