//! Default Operator Settings
//!
//! Values for a typical 2-8 °C pharmaceutical cold chain.

/// Lower edge of the safe temperature band (°C).
pub const DEFAULT_TEMP_MIN_C: f32 = 2.0;

/// Upper edge of the safe temperature band (°C).
pub const DEFAULT_TEMP_MAX_C: f32 = 8.0;

/// Humidity ceiling (%RH). There is no floor.
pub const DEFAULT_HUMIDITY_MAX_PCT: f32 = 60.0;

/// Consecutive bad ticks required before escalating.
pub const DEFAULT_VIOLATION_THRESHOLD: u32 = 3;

/// Tick cadence (ms).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2_000;
