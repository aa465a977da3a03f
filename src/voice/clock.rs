//! Clock and id source.
//!
//! Keeps monotonic timing (for timeouts and durations) separate from wall
//! time (for timestamps shown to clients) and centralizes id generation so
//! tests can reason about both independently of real wall-clock time.

use chrono::{DateTime, Utc};
use std::time::Instant;
use uuid::Uuid;

/// A monotonic instant used for speaking-duration bookkeeping and timeouts.
pub fn now_monotonic() -> Instant {
    Instant::now()
}

/// Current wall-clock time in UTC, used for `connected_at`, `last_heartbeat`,
/// `request_time`, and any ISO-8601 timestamp handed back to clients.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Generates a fresh v4 UUID, used for agent ids (when the transport doesn't
/// supply one) and voice request ids.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
