//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Declaration identifiers
pub const FIELD_TYPE_NAME: &str = "type_name";

// Classification outcomes
pub const FIELD_CHANGE_KIND: &str = "change_kind";
pub const FIELD_DEPTH: &str = "depth";
pub const FIELD_OUTCOME: &str = "outcome";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_DEPTH_EXCEEDED: &str = "depth_exceeded";
