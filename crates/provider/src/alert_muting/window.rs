use super::payload::{to_millis, PayloadError};

/// Chooses the start time (milliseconds) to resend on update.
///
/// Once the declared start has passed, the platform has already replaced it
/// with its own effective start; resending the declared value would read back
/// as drift. The decision is made against `now` on every call.
pub fn start_time_for_update(
    declared_start: i64,
    effective_start: Option<i64>,
    now: i64,
) -> Result<i64, PayloadError> {
    match effective_start.filter(|ms| *ms > 0) {
        Some(effective) if declared_start <= now => {
            tracing::debug!(effective, declared_start, "replaced start time with effective time");
            Ok(effective)
        }
        _ => {
            tracing::debug!(declared_start, "using specified start time");
            to_millis("start_time", declared_start)
        }
    }
}
