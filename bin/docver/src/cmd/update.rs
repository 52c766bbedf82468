//! Update command - bring a publish directory up to date

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use docver_core::PublishConfig;
use docver_publish::Publisher;

/// Run the update command.
///
/// Recreates the convenience links and rewrites the version manifest and
/// root redirect.
pub fn run(config_path: Option<&Path>, dir: &Path) -> Result<()> {
    tracing::info!(?config_path, ?dir, "Updating publish directory");

    let config = load_config(config_path)?;
    let publisher = Publisher::new(config);
    let stats = publisher.publish(dir).wrap_err("Update failed")?;

    println!("Updated {}", dir.display());
    println!("  Releases: {}", stats.releases);
    match &stats.stable {
        Some(stable) => println!("  Stable:   {stable}"),
        None => println!("  Stable:   (none)"),
    }
    if let Some(target) = &stats.redirect_target {
        println!("  Redirect: ./{target}/");
    }

    Ok(())
}

/// Load configuration, falling back to defaults when no file is given.
pub(crate) fn load_config(config_path: Option<&Path>) -> Result<PublishConfig> {
    match config_path {
        Some(path) => PublishConfig::load(path).wrap_err("Failed to load configuration"),
        None => Ok(PublishConfig::default()),
    }
}
