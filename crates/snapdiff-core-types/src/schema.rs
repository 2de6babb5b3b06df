//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names consistent between the core,
//! the HTTP server and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison identifiers
pub const FIELD_VARIANT: &str = "variant";
pub const FIELD_RECORD_KEY: &str = "record_key";

// Collection sizes
pub const FIELD_RECORDS_FIRST: &str = "records_first";
pub const FIELD_RECORDS_SECOND: &str = "records_second";
pub const FIELD_DIFF_COUNT: &str = "diff_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Service lifecycle messages
pub const MSG_SERVICE_START: &str = "Service start...";
pub const MSG_SERVICE_STOP: &str = "Service stop...";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }
}
