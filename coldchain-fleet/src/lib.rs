//! Fleet driver for Coldchain
//!
//! Wraps the pure tick engine in `coldchain-core` with the state a running
//! simulation needs: the seeded boxes, settings an operator can change at any
//! time, the capped alert log, and a background runner that ticks on a timer.
//!
//! ```no_run
//! use std::sync::Arc;
//! use coldchain_fleet::{Fleet, FleetRunner, SettingsHandle};
//! use parking_lot::Mutex;
//!
//! let fleet = Arc::new(Mutex::new(Fleet::seeded(SettingsHandle::default())));
//! let runner = FleetRunner::spawn(Arc::clone(&fleet));
//!
//! // ... later
//! let ticks = runner.stop().unwrap();
//! println!("{} ticks, {} alerts", ticks, fleet.lock().alerts().len());
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod fleet;
pub mod handle;
pub mod runner;
pub mod seed;
pub mod summary;

pub use errors::{FleetError, FleetResult};
pub use fleet::{Fleet, FleetEntropy, TickReport};
pub use handle::SettingsHandle;
pub use runner::{FleetRunner, SharedFleet};
pub use seed::initial_boxes;
pub use summary::{BoxView, FleetSnapshot, FleetSummary};
