//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_TOOL_ID: &str = "tool_id";
pub const FIELD_PLATFORM: &str = "platform";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_APP_TYPE: &str = "app_type";

// Collection sizes
pub const FIELD_EXTENSION_COUNT: &str = "extension_count";
pub const FIELD_PLACEMENT_COUNT: &str = "placement_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
