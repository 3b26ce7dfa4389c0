//! Shared fixtures for the fleet integration tests

#![allow(dead_code)]

use std::sync::Arc;

use coldchain_core::{
    entropy::{RngEntropy, ScriptedEntropy},
    time::FixedTime,
    Settings,
};
use coldchain_fleet::{initial_boxes, Fleet, SettingsHandle, SharedFleet};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const START_MS: u64 = 1_700_000_000_000;

pub fn settings_with(threshold: u32, tick_interval_ms: u64) -> SettingsHandle {
    SettingsHandle::new(Settings {
        violation_threshold: threshold,
        tick_interval_ms,
        ..Settings::default()
    })
    .unwrap()
}

/// Seed fleet whose readings never drift
pub fn neutral_fleet(settings: SettingsHandle) -> Fleet {
    Fleet::new(
        initial_boxes(),
        settings,
        Box::new(FixedTime::new(START_MS)),
        Box::new(ScriptedEntropy::neutral()),
    )
}

/// Seed fleet replaying the given unit draws
pub fn scripted_fleet(settings: SettingsHandle, units: &[f32]) -> Fleet {
    Fleet::new(
        initial_boxes(),
        settings,
        Box::new(FixedTime::new(START_MS)),
        Box::new(ScriptedEntropy::new(units)),
    )
}

/// Seed fleet on a seeded generator
pub fn random_fleet(settings: SettingsHandle, seed: u64) -> Fleet {
    Fleet::new(
        initial_boxes(),
        settings,
        Box::new(FixedTime::new(START_MS)),
        Box::new(RngEntropy::new(StdRng::seed_from_u64(seed))),
    )
}

pub fn shared(fleet: Fleet) -> SharedFleet {
    Arc::new(Mutex::new(fleet))
}
