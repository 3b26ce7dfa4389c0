//! Tick engine for Coldchain
//!
//! Simulates cold-chain shipment boxes carrying temperature/humidity sensors
//! and turns their noisy readings into a health status and escalation alerts.
//!
//! Key properties:
//! - Pure ticks: boxes in, new boxes and alerts out, inputs untouched
//! - Injected randomness and time, so runs can be replayed exactly
//! - Bounded memory: 20 readings per box, 50 alerts overall
//!
//! ```no_run
//! use coldchain_core::{advance_tick, AlertLog, Settings, ShipmentBox};
//! use coldchain_core::entropy::RngEntropy;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let boxes = vec![ShipmentBox::new("BOX-101", "Vaccines", "V-1", "Zone A", 4.5, 45.0)];
//! let settings = Settings::default();
//! let mut log = AlertLog::new();
//! let mut entropy = RngEntropy::new(StdRng::seed_from_u64(1));
//!
//! let outcome = advance_tick(&boxes, &settings, &log, 0, &mut entropy);
//! log.record(outcome.alerts);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod alerts;
pub mod buffer;
pub mod constants;
pub mod engine;
pub mod entropy;
pub mod errors;
pub mod generator;
pub mod model;
pub mod settings;
pub mod time;

// Public API
pub use alerts::{AlertEvent, AlertKind, AlertLog, Escalation, Severity, ViolationCheck};
pub use engine::{advance_tick, apply_reading, check_reading, BoxUpdate, TickOutcome};
pub use entropy::EntropySource;
pub use errors::{SettingsError, SettingsResult};
pub use generator::{next_reading, WalkBounds, WalkMode};
pub use model::{BoxStatus, Reading, ShipmentBox};
pub use settings::{Settings, SettingsPatch};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
