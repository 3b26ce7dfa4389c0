//! Monitored Boxes and Their Readings
//!
//! A [`ShipmentBox`] is one container in the fleet: a fixed identity, the
//! latest sensor values, the violation counter that drives its status, and a
//! short window of recent readings.
//!
//! Only the tick engine moves a box's counter, status and correction flag.
//! Everything outside this crate sees them through read-only accessors and
//! gets a new box value back from each tick rather than a mutated one.

use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    buffer::CircularBuffer,
    constants::READING_HISTORY_CAPACITY,
    generator::round_to_walk_precision,
    time::Timestamp,
};

/// Reading window kept per box
pub type ReadingHistory = CircularBuffer<Reading, READING_HISTORY_CAPACITY>;

/// One sampled observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// When the tick ran, in milliseconds
    pub timestamp: Timestamp,
    /// °C, two decimals
    pub temperature: f32,
    /// %RH, two decimals
    pub humidity: f32,
    /// Accelerometer crossed its jolt threshold
    pub shock: bool,
}

/// Health classification of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxStatus {
    /// No outstanding violations
    Stable,
    /// Violations accumulating, threshold not reached yet
    #[serde(rename = "At Risk")]
    AtRisk,
    /// Escalated; auto-correction engaged
    Critical,
}

impl BoxStatus {
    /// Label shown to operators
    pub const fn label(&self) -> &'static str {
        match self {
            BoxStatus::Stable => "Stable",
            BoxStatus::AtRisk => "At Risk",
            BoxStatus::Critical => "Critical",
        }
    }
}

impl fmt::Display for BoxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A monitored shipment container
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentBox {
    id: String,
    name: String,
    batch_number: String,
    location: String,
    pub(crate) current_temperature: f32,
    pub(crate) current_humidity: f32,
    pub(crate) consecutive_violations: u32,
    pub(crate) status: BoxStatus,
    pub(crate) is_correcting: bool,
    pub(crate) readings: ReadingHistory,
}

impl ShipmentBox {
    /// Create a stable box with no history
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        batch_number: impl Into<String>,
        location: impl Into<String>,
        temperature: f32,
        humidity: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            batch_number: batch_number.into(),
            location: location.into(),
            current_temperature: temperature,
            current_humidity: humidity,
            consecutive_violations: 0,
            status: BoxStatus::Stable,
            is_correcting: false,
            readings: ReadingHistory::new(),
        }
    }

    /// Stable unique id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product batch
    pub fn batch_number(&self) -> &str {
        &self.batch_number
    }

    /// Where the box is
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Live temperature (°C)
    pub fn current_temperature(&self) -> f32 {
        self.current_temperature
    }

    /// Live humidity (%RH)
    pub fn current_humidity(&self) -> f32 {
        self.current_humidity
    }

    /// Recent bad ticks, decayed by good ones
    pub fn consecutive_violations(&self) -> u32 {
        self.consecutive_violations
    }

    /// Status after the last tick
    pub fn status(&self) -> BoxStatus {
        self.status
    }

    /// Auto-correction is steering the walk toward safe values
    pub fn is_correcting(&self) -> bool {
        self.is_correcting
    }

    /// Recent readings, oldest first
    pub fn readings(&self) -> &ReadingHistory {
        &self.readings
    }

    /// Newest reading, if any
    pub fn latest_reading(&self) -> Option<&Reading> {
        self.readings.last()
    }

    /// Copy of this box with the temperature shifted by `delta` °C
    ///
    /// Counter, status and history are left alone; the next tick judges the
    /// new value.
    pub fn nudged(&self, delta: f32) -> Self {
        let mut next = self.clone();
        next.current_temperature = round_to_walk_precision(self.current_temperature + delta);
        next
    }
}
