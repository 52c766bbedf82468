//! Publish-directory update orchestration.
//!
//! One run scans the directory, recreates the convenience links, and
//! rewrites the version manifest and root redirect. Runs are repeatable:
//! links are replaced, never stacked, and generated files are overwritten.

use std::{
    fs,
    path::{Path, PathBuf},
};

use docver_core::PublishConfig;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    manifest::{ManifestError, ManifestGenerator},
    redirect::{RedirectError, RedirectGenerator},
    scan::{ScanError, VersionSet},
};

/// Publisher errors.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Publish directory missing or not a directory.
    #[error("publish directory not found: {0}")]
    MissingDirectory(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory scan failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Manifest write failed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Redirect write failed.
    #[error(transparent)]
    Redirect(#[from] RedirectError),

    /// Convenience links need symlink support.
    #[error("symbolic links are not supported on this platform")]
    LinksUnsupported,
}

/// Result type for publisher operations.
pub type Result<T> = std::result::Result<T, PublishError>;

/// Summary of one publisher run.
#[derive(Debug, Clone)]
pub struct PublishStats {
    /// Number of release directories found.
    pub releases: usize,

    /// Name of the stable release, if one exists.
    pub stable: Option<String>,

    /// Where the root redirect points, when written.
    pub redirect_target: Option<String>,
}

/// Maintains a publish directory.
#[derive(Debug)]
pub struct Publisher {
    config: PublishConfig,
}

impl Publisher {
    /// Create a new publisher.
    #[must_use]
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }

    /// Scan `dir` without modifying it.
    pub fn scan(&self, dir: &Path) -> Result<VersionSet> {
        if !dir.is_dir() {
            return Err(PublishError::MissingDirectory(dir.to_path_buf()));
        }
        Ok(VersionSet::scan(dir)?)
    }

    /// Bring `dir` up to date: links, manifest, redirect.
    pub fn publish(&self, dir: &Path) -> Result<PublishStats> {
        let versions = self.scan(dir)?;
        info!(releases = versions.len(), "scanned publish directory");

        let stable = versions.stable().map(|r| r.name().to_string());
        match &stable {
            Some(name) => {
                replace_link(&dir.join(&self.config.links.stable), Path::new(name))?;
            }
            None => {
                debug!("no stable release, removing stable link");
                remove_link(&dir.join(&self.config.links.stable))?;
            }
        }
        replace_link(
            &dir.join(&self.config.links.dev),
            Path::new(&self.config.links.dev_target),
        )?;

        ManifestGenerator::new(self.config.clone()).write(&versions, dir)?;

        // The redirect prefers the concrete stable version and falls back
        // to the dev link when no stable release has been published yet.
        let redirect_target = if self.config.redirect.enabled {
            let target = stable.clone().unwrap_or_else(|| self.config.links.dev.clone());
            RedirectGenerator::new(self.config.clone()).write(&target, dir)?;
            Some(target)
        } else {
            None
        };

        Ok(PublishStats {
            releases: versions.len(),
            stable,
            redirect_target,
        })
    }
}

/// Recreate `link` pointing at `target`, replacing any previous link.
#[cfg(unix)]
fn replace_link(link: &Path, target: &Path) -> Result<()> {
    remove_link(link)?;
    std::os::unix::fs::symlink(target, link)?;
    debug!(link = %link.display(), target = %target.display(), "created link");
    Ok(())
}

#[cfg(not(unix))]
fn replace_link(_link: &Path, _target: &Path) -> Result<()> {
    Err(PublishError::LinksUnsupported)
}

/// Remove a previous convenience link if present.
///
/// Only symlinks are removed; a real directory under the same name is
/// left in place and surfaces as an error when the link is recreated.
fn remove_link(link: &Path) -> Result<()> {
    match fs::symlink_metadata(link) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::remove_file(link)?;
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn publish_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        for name in names {
            fs::create_dir(dir.path().join(name)).expect("create version dir");
        }
        dir
    }

    fn link_target(path: &Path) -> String {
        fs::read_link(path)
            .expect("read link")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_publish_full_tree() {
        let dir = publish_dir(&["0.9", "1.0", "1.1rc1", "main"]);
        let publisher = Publisher::new(PublishConfig::default());

        let stats = publisher.publish(dir.path()).expect("publish");

        assert_eq!(stats.releases, 3);
        assert_eq!(stats.stable.as_deref(), Some("1.0"));
        assert_eq!(stats.redirect_target.as_deref(), Some("1.0"));

        assert_eq!(link_target(&dir.path().join("stable")), "1.0");
        assert_eq!(link_target(&dir.path().join("dev")), "main");

        let manifest = fs::read_to_string(dir.path().join("versions.txt")).expect("read");
        assert_eq!(manifest, "1.1rc1\n1.0\n0.9\nstable\ndev");

        let redirect = fs::read_to_string(dir.path().join("index.html")).expect("read");
        assert!(redirect.contains("url=./1.0/index.html"));
    }

    #[test]
    fn test_publish_without_stable_release() {
        let dir = publish_dir(&["1.0rc1", "main"]);
        let publisher = Publisher::new(PublishConfig::default());

        let stats = publisher.publish(dir.path()).expect("publish");

        assert!(stats.stable.is_none());
        assert_eq!(stats.redirect_target.as_deref(), Some("dev"));
        assert!(!dir.path().join("stable").exists());

        let redirect = fs::read_to_string(dir.path().join("index.html")).expect("read");
        assert!(redirect.contains("url=./dev/index.html"));
    }

    #[test]
    fn test_publish_is_repeatable() {
        let dir = publish_dir(&["1.0", "main"]);
        let publisher = Publisher::new(PublishConfig::default());

        publisher.publish(dir.path()).expect("first run");
        let stats = publisher.publish(dir.path()).expect("second run");

        // The stable/dev links from the first run must not be scanned as
        // versions or stack into dangling links.
        assert_eq!(stats.releases, 1);
        assert_eq!(link_target(&dir.path().join("stable")), "1.0");

        let manifest = fs::read_to_string(dir.path().join("versions.txt")).expect("read");
        assert_eq!(manifest, "1.0\nstable\ndev");
    }

    #[test]
    fn test_stable_link_removed_when_release_deleted() {
        let dir = publish_dir(&["1.0", "main"]);
        let publisher = Publisher::new(PublishConfig::default());
        publisher.publish(dir.path()).expect("first run");

        fs::remove_dir(dir.path().join("1.0")).expect("remove release");
        publisher.publish(dir.path()).expect("second run");

        assert!(fs::symlink_metadata(dir.path().join("stable")).is_err());
    }

    #[test]
    fn test_missing_directory() {
        let publisher = Publisher::new(PublishConfig::default());
        let err = publisher
            .publish(Path::new("/nonexistent/publish"))
            .expect_err("must fail");
        assert!(matches!(err, PublishError::MissingDirectory(_)));
    }
}
