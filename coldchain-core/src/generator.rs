//! Reading Generator
//!
//! Produces the next sensor sample for a box as a bounded random walk.
//!
//! ## Algorithm
//!
//! ```text
//! step  = (u - 0.5) * volatility            u ~ U[0, 1)
//! step += (target - current) * 0.3          only while correcting
//! next  = clamp(current + step, bounds)
//! next  = round(next, 2 decimals)
//! ```
//!
//! Each quantity has its own bounds: `[-20, 40]` °C for temperature and
//! `[0, 100]` %RH for humidity.
//!
//! The pull toward the target is proportional, so a correcting box drifts back
//! over several ticks rather than jumping to the setpoint.
//!
//! ## Modes
//!
//! | Mode       | Temp volatility | Temp target          | RH volatility | RH target |
//! |------------|-----------------|----------------------|---------------|-----------|
//! | Normal     | 0.8 °C          | none                 | 2 %           | none      |
//! | Correcting | 0.5 °C          | mid of (min, max)    | 1 %           | 45 %      |
//!
//! A shock is an independent 1% event per tick.
//!
//! ## Draw Order
//!
//! Each call consumes exactly three unit draws: temperature step, humidity
//! step, shock. Scripted entropy in tests relies on this order.

use crate::{
    constants::walk::{
        CORRECTION_PULL_FACTOR, HUMIDITY_CLAMP_MAX_PCT, HUMIDITY_CLAMP_MIN_PCT,
        HUMIDITY_CORRECTION_TARGET_PCT, HUMIDITY_VOLATILITY_CORRECTING_PCT,
        HUMIDITY_VOLATILITY_NORMAL_PCT, SHOCK_PROBABILITY, TEMP_CLAMP_MAX_C, TEMP_CLAMP_MIN_C,
        TEMP_VOLATILITY_CORRECTING_C, TEMP_VOLATILITY_NORMAL_C, WALK_ROUNDING_SCALE,
    },
    entropy::EntropySource,
    model::{Reading, ShipmentBox},
    settings::Settings,
    time::Timestamp,
};

/// Hard limits a walk is clamped into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkBounds {
    /// Lower clamp
    pub min: f32,
    /// Upper clamp
    pub max: f32,
}

impl WalkBounds {
    /// Physically plausible temperatures (°C)
    pub const TEMPERATURE: WalkBounds = WalkBounds {
        min: TEMP_CLAMP_MIN_C,
        max: TEMP_CLAMP_MAX_C,
    };

    /// Relative humidity (%RH)
    pub const HUMIDITY: WalkBounds = WalkBounds {
        min: HUMIDITY_CLAMP_MIN_PCT,
        max: HUMIDITY_CLAMP_MAX_PCT,
    };

    /// Inclusive on both ends
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Walk regime for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkMode {
    /// Free random walk
    Normal,
    /// Biased toward the given temperature setpoint and the humidity target
    Correcting {
        /// °C the temperature is pulled toward
        temperature_target: f32,
    },
}

impl WalkMode {
    /// Mode for a box given the settings of this tick
    pub fn for_box(correcting: bool, settings: &Settings) -> Self {
        if correcting {
            WalkMode::Correcting {
                temperature_target: settings.safe_temperature_midpoint(),
            }
        } else {
            WalkMode::Normal
        }
    }
}

/// Raw output of one generator call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// °C
    pub temperature: f32,
    /// %RH
    pub humidity: f32,
    /// Jolt on this tick
    pub shock: bool,
}

impl Sample {
    /// Attach the tick timestamp
    pub fn at(self, timestamp: Timestamp) -> Reading {
        Reading {
            timestamp,
            temperature: self.temperature,
            humidity: self.humidity,
            shock: self.shock,
        }
    }
}

/// One step of the bounded walk
pub fn next_value<E: EntropySource + ?Sized>(
    current: f32,
    volatility: f32,
    target: Option<f32>,
    bounds: WalkBounds,
    entropy: &mut E,
) -> f32 {
    let mut step = (entropy.next_unit() - 0.5) * volatility;

    if let Some(target) = target {
        step += (target - current) * CORRECTION_PULL_FACTOR;
    }

    let next = (current + step).clamp(bounds.min, bounds.max);
    round_to_walk_precision(next)
}

/// Round to the two decimals every reading carries
pub fn round_to_walk_precision(value: f32) -> f32 {
    libm::roundf(value * WALK_ROUNDING_SCALE) / WALK_ROUNDING_SCALE
}

/// Next sample from the current values
pub fn next_sample<E: EntropySource + ?Sized>(
    temperature: f32,
    humidity: f32,
    mode: WalkMode,
    entropy: &mut E,
) -> Sample {
    let (temperature, humidity) = match mode {
        WalkMode::Normal => (
            next_value(
                temperature,
                TEMP_VOLATILITY_NORMAL_C,
                None,
                WalkBounds::TEMPERATURE,
                entropy,
            ),
            next_value(
                humidity,
                HUMIDITY_VOLATILITY_NORMAL_PCT,
                None,
                WalkBounds::HUMIDITY,
                entropy,
            ),
        ),
        WalkMode::Correcting { temperature_target } => (
            next_value(
                temperature,
                TEMP_VOLATILITY_CORRECTING_C,
                Some(temperature_target),
                WalkBounds::TEMPERATURE,
                entropy,
            ),
            next_value(
                humidity,
                HUMIDITY_VOLATILITY_CORRECTING_PCT,
                Some(HUMIDITY_CORRECTION_TARGET_PCT),
                WalkBounds::HUMIDITY,
                entropy,
            ),
        ),
    };

    let shock = entropy.next_unit() < SHOCK_PROBABILITY;

    Sample {
        temperature,
        humidity,
        shock,
    }
}

/// Next reading for a box under this tick's settings
pub fn next_reading<E: EntropySource + ?Sized>(
    current: &ShipmentBox,
    settings: &Settings,
    now: Timestamp,
    entropy: &mut E,
) -> Reading {
    let mode = WalkMode::for_box(current.is_correcting(), settings);
    next_sample(
        current.current_temperature(),
        current.current_humidity(),
        mode,
        entropy,
    )
    .at(now)
}
