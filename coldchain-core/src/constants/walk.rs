//! Random-Walk Parameters
//!
//! The generator moves each value by a uniform step around zero. While a box
//! is correcting, a proportional pull toward a safe target is added on top of
//! the step, so recovery plays out over several ticks instead of snapping.

// ===== FREE WALK =====

/// Temperature step width in normal operation (°C).
///
/// The step is drawn from `[-0.4, +0.4]`.
pub const TEMP_VOLATILITY_NORMAL_C: f32 = 0.8;

/// Humidity step width in normal operation (%RH).
pub const HUMIDITY_VOLATILITY_NORMAL_PCT: f32 = 2.0;

// ===== CORRECTING WALK =====

/// Temperature step width while auto-correction is active (°C).
pub const TEMP_VOLATILITY_CORRECTING_C: f32 = 0.5;

/// Humidity step width while auto-correction is active (%RH).
pub const HUMIDITY_VOLATILITY_CORRECTING_PCT: f32 = 1.0;

/// Humidity the environmental control steers toward (%RH).
pub const HUMIDITY_CORRECTION_TARGET_PCT: f32 = 45.0;

/// Fraction of the distance to target closed per tick.
///
/// A pull of `(target - current) * 0.3` is added to the random step.
pub const CORRECTION_PULL_FACTOR: f32 = 0.3;

// ===== PHYSICAL CLAMP =====

/// Lowest temperature a walk may reach (°C).
pub const TEMP_CLAMP_MIN_C: f32 = -20.0;

/// Highest temperature a walk may reach (°C).
pub const TEMP_CLAMP_MAX_C: f32 = 40.0;

/// Lowest humidity a walk may reach (%RH).
pub const HUMIDITY_CLAMP_MIN_PCT: f32 = 0.0;

/// Highest humidity a walk may reach (%RH).
///
/// Above every sensible `humidityMax`, so humidity violations stay reachable.
pub const HUMIDITY_CLAMP_MAX_PCT: f32 = 100.0;

/// Scale used to round every generated value to two decimals.
pub const WALK_ROUNDING_SCALE: f32 = 100.0;

// ===== SHOCK =====

/// Per-tick probability that the accelerometer reports a jolt.
///
/// Independent of the temperature and humidity walks.
pub const SHOCK_PROBABILITY: f32 = 0.01;
