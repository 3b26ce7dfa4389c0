//! Retention Limits
//!
//! Both logs are bounded no matter how long the simulation runs or how fast it
//! ticks. Insertion past the cap evicts the oldest entry.

/// Readings kept per box, oldest first.
///
/// Enough for a short trend chart on the dashboard.
pub const READING_HISTORY_CAPACITY: usize = 20;

/// Alerts kept across the whole fleet, most recent first.
pub const ALERT_LOG_CAPACITY: usize = 50;
