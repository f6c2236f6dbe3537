//! Incident field rules: creation defaults, localized messages, title
//! validation, and the date-bound widening used by the list filter.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Creation defaults
// ---------------------------------------------------------------------------

/// Severity assigned when a create payload omits the field.
pub const DEFAULT_SEVERITY: &str = "medium";

/// Status assigned when a create payload omits the field.
pub const DEFAULT_STATUS: &str = "open";

// ---------------------------------------------------------------------------
// Localized messages
// ---------------------------------------------------------------------------

/// User-facing message for a missing incident. The operational map frontend
/// is Ukrainian, so error details are too.
pub const MSG_NOT_FOUND: &str = "Інцидент не знайдено";

/// User-facing message for an unexpected server failure.
pub const MSG_INTERNAL: &str = "Внутрішня помилка сервера";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that an incident title contains at least one non-whitespace
/// character.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Treat absent and empty query parameters the same: no filter.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Date-bound widening
// ---------------------------------------------------------------------------

/// Midnight UTC at the start of `date`. Lower bound of an inclusive
/// date-range filter.
pub fn day_start(date: NaiveDate) -> Timestamp {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

/// Last representable instant of `date` (23:59:59.999999 UTC), so an
/// end-date filter covers the whole calendar day rather than just its
/// midnight.
pub fn day_end(date: NaiveDate) -> Timestamp {
    let end = date
        .and_hms_micro_opt(23, 59, 59, 999_999)
        .expect("23:59:59.999999 is a valid time of day");
    Utc.from_utc_datetime(&end)
}
