//! Fleet state and the per-tick driver
//!
//! [`Fleet`] owns everything that lives between ticks: the boxes, the alert
//! log, and the time and randomness sources. Settings are shared through a
//! [`SettingsHandle`] so an operator can change them from elsewhere.
//!
//! ## One Tick
//!
//! ```text
//! settings.snapshot() ──┐
//! clock.now() ──────────┼─→ advance_tick(boxes, …) ─→ replace boxes
//! entropy ──────────────┘                          └─→ alerts.record(new)
//! ```
//!
//! The engine never sees the lock, the clock or the log's mutability; it gets
//! plain values and hands back new ones.

use coldchain_core::{
    advance_tick,
    entropy::{EntropySource, RngEntropy},
    time::{SystemTime, TimeSource, Timestamp},
    AlertEvent, AlertLog, Settings, SettingsPatch, ShipmentBox,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    errors::{FleetError, FleetResult},
    handle::SettingsHandle,
    seed::initial_boxes,
    summary::{BoxView, FleetSnapshot, FleetSummary},
};

/// Randomness owned by a fleet; must cross into the runner thread
pub type FleetEntropy = Box<dyn EntropySource + Send>;

/// What a single tick produced
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// 1-based tick counter
    pub tick: u64,
    pub timestamp: Timestamp,
    /// Alerts raised this tick, also recorded in the log
    pub alerts: Vec<AlertEvent>,
}

/// Live simulation state
pub struct Fleet {
    boxes: Vec<ShipmentBox>,
    alerts: AlertLog,
    settings: SettingsHandle,
    clock: Box<dyn TimeSource>,
    entropy: FleetEntropy,
    ticks: u64,
}

impl Fleet {
    pub fn new(
        boxes: Vec<ShipmentBox>,
        settings: SettingsHandle,
        clock: Box<dyn TimeSource>,
        entropy: FleetEntropy,
    ) -> Self {
        Self {
            boxes,
            alerts: AlertLog::new(),
            settings,
            clock,
            entropy,
            ticks: 0,
        }
    }

    /// Seed fleet on the system clock with OS-seeded randomness
    pub fn seeded(settings: SettingsHandle) -> Self {
        Self::new(
            initial_boxes(),
            settings,
            Box::new(SystemTime),
            Box::new(RngEntropy::new(StdRng::from_entropy())),
        )
    }

    /// Run one tick over every box
    pub fn tick(&mut self) -> TickReport {
        let settings = self.settings.snapshot();
        let now = self.clock.now();

        let outcome = advance_tick(
            &self.boxes,
            &settings,
            &self.alerts,
            now,
            self.entropy.as_mut(),
        );

        self.boxes = outcome.boxes;
        self.ticks += 1;

        for alert in &outcome.alerts {
            log::info!("[{}] {} ({}): {}", alert.kind, alert.box_id, alert.box_name, alert.message);
        }
        self.alerts.record(outcome.alerts.iter().cloned());

        log::debug!(
            "Tick {} at {}: {} boxes, {} new alerts, log holds {}",
            self.ticks,
            now,
            self.boxes.len(),
            outcome.alerts.len(),
            self.alerts.len()
        );

        TickReport {
            tick: self.ticks,
            timestamp: now,
            alerts: outcome.alerts,
        }
    }

    pub fn boxes(&self) -> &[ShipmentBox] {
        &self.boxes
    }

    pub fn get(&self, id: &str) -> Option<&ShipmentBox> {
        self.boxes.iter().find(|b| b.id() == id)
    }

    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    pub fn settings(&self) -> &SettingsHandle {
        &self.settings
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Validated partial settings update, visible from the next tick
    pub fn update_settings(&self, patch: &SettingsPatch) -> FleetResult<Settings> {
        self.settings.update(patch)
    }

    /// Shift a box's temperature by `delta` °C, returning the new value
    ///
    /// Only the live temperature moves; the next tick decides what it means.
    pub fn nudge_temperature(&mut self, id: &str, delta: f32) -> FleetResult<f32> {
        let slot = self
            .boxes
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or_else(|| FleetError::UnknownBox { id: id.to_string() })?;

        *slot = slot.nudged(delta);
        log::info!("{} nudged by {}°C to {}°C", id, delta, slot.current_temperature());
        Ok(slot.current_temperature())
    }

    pub fn clear_alerts(&mut self) {
        log::info!("Clearing {} alerts", self.alerts.len());
        self.alerts.clear();
    }

    pub fn summary(&self) -> FleetSummary {
        FleetSummary::collect(&self.boxes, &self.alerts)
    }

    /// Borrowed view for display
    pub fn snapshot(&self) -> FleetSnapshot<'_> {
        let settings = self.settings.snapshot();
        FleetSnapshot {
            tick: self.ticks,
            settings,
            summary: self.summary(),
            boxes: self
                .boxes
                .iter()
                .map(|b| BoxView::new(b, &settings))
                .collect(),
            alerts: &self.alerts,
        }
    }

    pub fn snapshot_json(&self) -> FleetResult<String> {
        serde_json::to_string(&self.snapshot()).map_err(|e| FleetError::Export {
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for Fleet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fleet")
            .field("boxes", &self.boxes)
            .field("alerts", &self.alerts.len())
            .field("ticks", &self.ticks)
            .field("wall_clock", &self.clock.is_wall_clock())
            .finish_non_exhaustive()
    }
}
