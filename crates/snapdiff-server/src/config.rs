//! Service configuration read from the process environment.

use snapdiff_core::errors::{ExError, ExErrorKind};
use snapdiff_core::logging_facility::Profile;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

const OP_LOAD_CONFIG: &str = "load_config";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Persist every successful comparison under `results_dir`
    pub log_results: bool,
    pub results_dir: PathBuf,
    pub log_profile: Profile,
    /// Default level for `snapdiff*` targets when `RUST_LOG` is unset
    pub log_level: String,
    /// Also write plain-text logs to a timestamped file in this directory
    pub log_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            log_results: false,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            log_profile: Profile::Development,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            shutdown_grace: Duration::ZERO,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first variable whose value does not parse.
    pub fn from_env() -> Result<Self, ExError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first variable whose value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(raw) => parse_var::<u16>("PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match var("SNAPDIFF_BIND") {
            Some(raw) => parse_var::<SocketAddr>("SNAPDIFF_BIND", &raw)?,
            None => SocketAddr::from(([127, 0, 0, 1], port)),
        };

        let log_results = match var("LOG_RESULTS") {
            Some(raw) => parse_flag("LOG_RESULTS", &raw)?,
            None => defaults.log_results,
        };
        let results_dir = var("SNAPDIFF_RESULTS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.results_dir);

        let log_profile = match var("SNAPDIFF_LOG_FORMAT") {
            Some(raw) => raw
                .parse::<Profile>()
                .map_err(|reason| invalid_config("SNAPDIFF_LOG_FORMAT", &raw, reason))?,
            None => defaults.log_profile,
        };
        let log_level = match var("SNAPDIFF_LOG_LEVEL").or_else(|| var("LOG_LEVEL")) {
            Some(raw) => normalize_level(&raw)
                .ok_or_else(|| invalid_config("SNAPDIFF_LOG_LEVEL", &raw, "unknown level"))?
                .to_string(),
            None => defaults.log_level,
        };
        let log_dir = var("SNAPDIFF_LOG_DIR").map(PathBuf::from);

        let max_upload_bytes = match var("SNAPDIFF_MAX_UPLOAD_BYTES") {
            Some(raw) => parse_var::<usize>("SNAPDIFF_MAX_UPLOAD_BYTES", &raw)?,
            None => defaults.max_upload_bytes,
        };
        let shutdown_grace = match var("SNAPDIFF_SHUTDOWN_GRACE_MS") {
            Some(raw) => {
                Duration::from_millis(parse_var::<u64>("SNAPDIFF_SHUTDOWN_GRACE_MS", &raw)?)
            }
            None => defaults.shutdown_grace,
        };

        Ok(Self {
            bind_addr,
            log_results,
            results_dir,
            log_profile,
            log_level,
            log_dir,
            max_upload_bytes,
            shutdown_grace,
        })
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T, ExError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| invalid_config(name, raw, e))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, ExError> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" => Ok(false),
        other => Err(invalid_config(name, other, "expected TRUE or FALSE")),
    }
}

/// Map a level name onto a tracing directive level
///
/// Accepts the tracing names plus the `WARNING` / `CRITICAL` / `NOTSET`
/// spellings used by older deployments of this service.
fn normalize_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" | "notset" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" | "critical" | "fatal" => Some("error"),
        _ => None,
    }
}

fn invalid_config(name: &str, raw: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op(OP_LOAD_CONFIG)
        .with_entity_id(name)
        .with_message(format!("invalid value '{}': {}", raw, reason))
}
