//! Shared fixtures for the engine integration tests
//!
//! Provides:
//! - Cold-chain settings matching the reference scenarios
//! - Reading builders for compliant and violating ticks
//! - A driver that feeds a scripted reading sequence through the engine

#![allow(dead_code)]

use coldchain_core::{apply_reading, AlertKind, Reading, Settings, ShipmentBox};

/// Safe band 2-8 °C, humidity ceiling 60 %
pub const TEMP_MIN: f32 = 2.0;
pub const TEMP_MAX: f32 = 8.0;
pub const HUMIDITY_MAX: f32 = 60.0;

/// Inside the band
pub const COMPLIANT_TEMP: f32 = 5.0;
/// Above the band
pub const WARM_TEMP: f32 = 10.0;
/// Below the ceiling
pub const COMPLIANT_HUMIDITY: f32 = 45.0;

pub fn cold_chain_settings(threshold: u32) -> Settings {
    Settings {
        temp_min: TEMP_MIN,
        temp_max: TEMP_MAX,
        humidity_max: HUMIDITY_MAX,
        violation_threshold: threshold,
        tick_interval_ms: 2_000,
    }
}

pub fn test_box() -> ShipmentBox {
    ShipmentBox::new(
        "BOX-101",
        "Vaccine Batch Alpha",
        "V-2023-001",
        "Warehouse Zone A",
        4.5,
        COMPLIANT_HUMIDITY,
    )
}

pub fn at_temperature(temperature: f32) -> Reading {
    Reading {
        timestamp: 0,
        temperature,
        humidity: COMPLIANT_HUMIDITY,
        shock: false,
    }
}

pub fn compliant() -> Reading {
    at_temperature(COMPLIANT_TEMP)
}

pub fn too_warm() -> Reading {
    at_temperature(WARM_TEMP)
}

/// Result of feeding a scripted sequence
pub struct Replay {
    pub final_box: ShipmentBox,
    pub alert_kinds: Vec<AlertKind>,
    pub boxes: Vec<ShipmentBox>,
}

/// Feed readings one per tick, timestamps counting up from 1
pub fn replay(start: ShipmentBox, readings: &[Reading], settings: &Settings) -> Replay {
    let mut current = start;
    let mut alert_kinds = Vec::new();
    let mut boxes = Vec::with_capacity(readings.len());

    for (tick, reading) in readings.iter().enumerate() {
        let stamped = Reading {
            timestamp: tick as u64 + 1,
            ..*reading
        };
        let update = apply_reading(&current, stamped, settings);
        if let Some(escalation) = update.escalation {
            alert_kinds.push(escalation.kind());
        }
        current = update.next;
        boxes.push(current.clone());
    }

    Replay {
        final_box: current,
        alert_kinds,
        boxes,
    }
}
