//! Constants for Coldchain Core
//!
//! Every tuning value the tick engine relies on lives here, grouped by the
//! concern it controls. Names carry their units.
//!
//! ## Organization
//!
//! - **Walk**: random-walk volatility, corrective pull and physical clamp
//! - **Retention**: caps on per-box reading history and the global alert log
//! - **Defaults**: operator-facing settings used when nothing else is supplied

/// Random-walk parameters for the reading generator.
pub mod walk;

/// Bounded history and alert-log sizes.
pub mod retention;

/// Default operator settings.
pub mod defaults;

pub use walk::{
    CORRECTION_PULL_FACTOR, HUMIDITY_CLAMP_MAX_PCT, HUMIDITY_CLAMP_MIN_PCT,
    HUMIDITY_CORRECTION_TARGET_PCT, SHOCK_PROBABILITY, TEMP_CLAMP_MAX_C, TEMP_CLAMP_MIN_C,
};

pub use retention::{ALERT_LOG_CAPACITY, READING_HISTORY_CAPACITY};
