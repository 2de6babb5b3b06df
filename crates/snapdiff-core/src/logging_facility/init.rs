//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.
//! Output always goes to stderr, leaving stdout to command results.
//! Handler registration happens at most once per process; later calls are
//! no-ops, so the server and the CLI can both call `init` unconditionally.

use super::file_sink::file_layer;
use std::fs::File;
use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Default level for `snapdiff*` targets when `RUST_LOG` is unset
    pub fn default_level(&self) -> &'static str {
        match self {
            Profile::Development => "debug",
            Profile::Production => "info",
            Profile::Test => "trace",
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    /// Parse a log format name (`pretty` / `json` / `test`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" | "development" => Ok(Profile::Development),
            "json" | "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility with the profile's default level
///
/// # Example
///
/// ```
/// use snapdiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    init_with_level(profile, profile.default_level());
}

/// Initialize the logging facility with an explicit default level
///
/// `RUST_LOG` always wins over `default_level`. An unparseable level falls
/// back to the profile default.
pub fn init_with_level(profile: Profile, default_level: &str) {
    init_with_file(profile, default_level, None);
}

/// [`init_with_level`] that also copies every event to `log_file` as text
///
/// Open the file with [`open_log_file`](super::file_sink::open_log_file).
/// Ignored for [`Profile::Test`].
pub fn init_with_file(profile: Profile, default_level: &str, log_file: Option<File>) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(format!("snapdiff={}", default_level)).unwrap_or_else(|_| {
                EnvFilter::new(format!("snapdiff={}", profile.default_level()))
            })
        });
        match profile {
            Profile::Development => {
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().with_writer(std::io::stderr))
                    .with(log_file.map(file_layer))
                    .try_init();
            }
            Profile::Production => {
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .with(log_file.map(file_layer))
                    .try_init();
            }
            Profile::Test => {
                // Test capture is initialized separately via init_test_capture()
                let _ = tracing_subscriber::registry().try_init();
            }
        }
    });
}
