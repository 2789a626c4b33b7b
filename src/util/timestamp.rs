//! ISO-8601 timestamps in the browser's `toISOString` shape.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod tests;

use time::{OffsetDateTime, UtcOffset};

/// Clock used by controllers that stamp outgoing requests.
pub type Clock = fn() -> OffsetDateTime;

/// Current UTC time.
#[must_use]
pub fn system_clock() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Format as `YYYY-MM-DDTHH:MM:SS.mmmZ`, always in UTC.
#[must_use]
pub fn iso8601_millis(at: OffsetDateTime) -> String {
    let at = at.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
        at.millisecond()
    )
}
