//! Docver CLI Library
//!
//! Command implementations for the docver binary, kept in a library so
//! they stay testable and documented.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (update, check)

pub mod cmd;

// Re-export the working types for convenience
pub use docver_core::PublishConfig;
pub use docver_publish::{PublishStats, Publisher};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
