//! Error Types for Settings Validation
//!
//! ## Where Errors Live
//!
//! The tick engine is total: every well-typed input produces a valid next state,
//! so `advance_tick` has no error channel at all. The only thing that can be
//! wrong is the operator configuration it is handed, and checking that is the
//! job of whoever owns the settings. This module is that check's vocabulary.
//!
//! Errors stay small and `Copy` so they can be returned from hot paths and
//! compared in tests, following the same rules as the rest of the crate:
//! inline data only, `&'static str` for field names and reasons.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use coldchain_core::{Settings, SettingsError, SettingsPatch};
//!
//! let current = Settings::default();
//! let patch = SettingsPatch { temp_min: Some(9.0), ..Default::default() };
//!
//! match current.apply(&patch) {
//!     Ok(_next) => {
//!         // Publish the merged settings for the next tick
//!     }
//!     Err(SettingsError::InvertedTemperatureRange { .. }) => {
//!         // Keep the old settings, tell the operator the band is empty
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings validation errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SettingsError {
    /// A numeric field is NaN or infinite
    #[error("Setting {field} is not a finite number")]
    NonFiniteValue {
        /// Name of the offending field
        field: &'static str,
    },

    /// The safe temperature band is empty or inverted
    #[error("Temperature range [{min}, {max}] is empty: tempMin must be below tempMax")]
    InvertedTemperatureRange {
        /// Configured lower bound
        min: f32,
        /// Configured upper bound
        max: f32,
    },

    /// Escalation would need zero bad ticks
    #[error("Violation threshold must be at least 1")]
    ZeroViolationThreshold,

    /// A zero cadence would tick continuously
    #[error("Tick interval must be at least 1 ms")]
    ZeroTickInterval,

    /// Serialized settings could not be decoded
    #[error("Malformed settings document: {reason}")]
    Malformed {
        /// Short description of the decoding failure
        reason: &'static str,
    },
}
