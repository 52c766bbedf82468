//! Check command - report a publish directory without writing

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use docver_publish::Publisher;

use super::update::load_config;

/// Run the check command.
///
/// Scans the publish directory and reports what an update would
/// advertise, without modifying anything.
pub fn run(config_path: Option<&Path>, dir: &Path) -> Result<()> {
    tracing::info!(?config_path, ?dir, "Checking publish directory");

    let config = load_config(config_path)?;
    let publisher = Publisher::new(config);
    let versions = publisher.scan(dir)?;

    if versions.is_empty() {
        bail!("No release directories found in {}", dir.display());
    }

    println!("Found {} release(s):", versions.len());
    for release in versions.releases() {
        let marker = if release.is_prerelease() {
            " (pre-release)"
        } else {
            ""
        };
        println!("  {}{marker}", release.name());
    }

    match versions.stable() {
        Some(stable) => println!("Stable: {}", stable.name()),
        None => println!("Stable: (none)"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_versions() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        std::fs::create_dir(dir.path().join("1.0")).expect("create version dir");

        run(None, dir.path()).expect("check");
    }

    #[test]
    fn test_check_fails_on_empty_tree() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        assert!(run(None, dir.path()).is_err());
    }
}
