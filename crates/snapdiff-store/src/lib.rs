//! snapdiff Store - byte-level I/O around the comparison core
//!
//! Turns uploaded gzip bytes into parsed snapshot documents and writes
//! comparison results to disk.

pub mod atomic;
pub mod decode;
pub mod errors;
pub mod results;

pub use decode::{decode_gzip_json, decompress_gzip, parse_json};
pub use results::{result_file_name, save_result, save_result_at};
