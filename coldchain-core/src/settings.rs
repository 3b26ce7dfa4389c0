//! Operator Settings
//!
//! Thresholds and cadence read by every tick. The operator may change them at
//! any moment, so the engine never holds on to them: each tick is handed one
//! [`Settings`] value and uses it for every box.
//!
//! Validation lives here rather than in the engine. A tick given inverted
//! bounds or a zero threshold still completes, it just classifies boxes in a
//! way nobody asked for. [`Settings::validate`] is what stops such values from
//! being published in the first place.
//!
//! ## Serialized Form
//!
//! ```json
//! {
//!   "tempMin": 2.0,
//!   "tempMax": 8.0,
//!   "humidityMax": 60.0,
//!   "violationThreshold": 3,
//!   "tickIntervalMs": 2000
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    constants::defaults::{
        DEFAULT_HUMIDITY_MAX_PCT, DEFAULT_TEMP_MAX_C, DEFAULT_TEMP_MIN_C,
        DEFAULT_TICK_INTERVAL_MS, DEFAULT_VIOLATION_THRESHOLD,
    },
    errors::{SettingsError, SettingsResult},
};

/// Thresholds and cadence for the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Lower edge of the safe band (°C), itself safe
    pub temp_min: f32,
    /// Upper edge of the safe band (°C), itself safe
    pub temp_max: f32,
    /// Humidity ceiling (%RH)
    pub humidity_max: f32,
    /// Consecutive bad ticks that trigger escalation
    pub violation_threshold: u32,
    /// Tick cadence (ms)
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temp_min: DEFAULT_TEMP_MIN_C,
            temp_max: DEFAULT_TEMP_MAX_C,
            humidity_max: DEFAULT_HUMIDITY_MAX_PCT,
            violation_threshold: DEFAULT_VIOLATION_THRESHOLD,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Check the invariants the engine assumes
    pub fn validate(&self) -> SettingsResult<()> {
        for (field, value) in [
            ("tempMin", self.temp_min),
            ("tempMax", self.temp_max),
            ("humidityMax", self.humidity_max),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::NonFiniteValue { field });
            }
        }

        if self.temp_min >= self.temp_max {
            return Err(SettingsError::InvertedTemperatureRange {
                min: self.temp_min,
                max: self.temp_max,
            });
        }

        if self.violation_threshold == 0 {
            return Err(SettingsError::ZeroViolationThreshold);
        }

        if self.tick_interval_ms == 0 {
            return Err(SettingsError::ZeroTickInterval);
        }

        Ok(())
    }

    /// Setpoint auto-correction steers toward
    pub fn safe_temperature_midpoint(&self) -> f32 {
        (self.temp_max + self.temp_min) / 2.0
    }

    /// Temperature outside `[temp_min, temp_max]`
    pub fn temperature_violated(&self, temperature: f32) -> bool {
        temperature < self.temp_min || temperature > self.temp_max
    }

    /// Humidity above the ceiling
    pub fn humidity_violated(&self, humidity: f32) -> bool {
        humidity > self.humidity_max
    }

    /// Merge a partial update, rejecting it whole if the result is invalid
    pub fn apply(&self, patch: &SettingsPatch) -> SettingsResult<Settings> {
        let merged = Settings {
            temp_min: patch.temp_min.unwrap_or(self.temp_min),
            temp_max: patch.temp_max.unwrap_or(self.temp_max),
            humidity_max: patch.humidity_max.unwrap_or(self.humidity_max),
            violation_threshold: patch
                .violation_threshold
                .unwrap_or(self.violation_threshold),
            tick_interval_ms: patch.tick_interval_ms.unwrap_or(self.tick_interval_ms),
        };

        merged.validate()?;
        Ok(merged)
    }

    /// Parse and validate a JSON document
    ///
    /// Missing fields fall back to their defaults.
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> SettingsResult<Settings> {
        let settings: Settings = serde_json::from_str(json).map_err(|e| {
            SettingsError::Malformed {
                reason: malformed_reason(&e),
            }
        })?;

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(feature = "std")]
fn malformed_reason(error: &serde_json::Error) -> &'static str {
    use serde_json::error::Category;

    match error.classify() {
        Category::Io => "i/o failure",
        Category::Syntax => "invalid JSON syntax",
        Category::Data => "field has the wrong type",
        Category::Eof => "document ended early",
    }
}

/// Partial settings update; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    /// New lower edge (°C)
    pub temp_min: Option<f32>,
    /// New upper edge (°C)
    pub temp_max: Option<f32>,
    /// New humidity ceiling (%RH)
    pub humidity_max: Option<f32>,
    /// New escalation threshold
    pub violation_threshold: Option<u32>,
    /// New tick cadence (ms)
    pub tick_interval_ms: Option<u64>,
}
