//! Structured logging facility for snapdiff
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Correlation propagation via spans
//! - Test capture mode for deterministic assertions
//! - Optional plain-text log file next to stderr output
//!
//! # Usage
//!
//! ```rust
//! use snapdiff_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod file_sink;
pub mod init;
pub mod macros;
pub mod test_capture;

pub use file_sink::{log_file_name, open_log_file};
pub use init::{init, init_with_file, init_with_level, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
