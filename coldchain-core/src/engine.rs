//! Violation & Status Engine
//!
//! ## Overview
//!
//! Each tick, every box gets a fresh reading from the generator and the engine
//! folds it into the box's violation counter, status and correction flag. The
//! box that comes out is a new value; the input slice is never touched, so
//! callers can detect change by comparing old and new.
//!
//! ## Per-Tick Transition
//!
//! Steps run in this order, all judged against the box *as it was* before the
//! tick for the correction flag:
//!
//! ```text
//! 1. bad = temp ∉ [min, max] ∨ humidity > max ∨ shock
//! 2. bad                 → violations += 1
//!    ¬bad ∧ ¬correcting  → violations = max(0, violations - 1)
//!    ¬bad ∧  correcting  → violations unchanged
//! 3. violations ≥ threshold ∧ ¬correcting      → Critical, correcting, alert
//! 4. 0 < violations < threshold ∧ ¬correcting  → AtRisk
//! 5. violations = 0                            → Stable, correction off
//! 6. otherwise                                 → status unchanged
//! ```
//!
//! ## State Machine
//!
//! ```text
//!            bad tick                   violations ≥ threshold
//!   Stable ───────────→ AtRisk ─────────────────────────────→ Critical
//!     ↑                   │                                   (correcting)
//!     │  violations = 0   │                                       │
//!     └───────────────────┘                                       │
//!     ↑                        violations = 0                     │
//!     └───────────────────────────────────────────────────────────┘
//! ```
//!
//! `Critical` never falls back to `AtRisk`; it has to drain to zero first.
//! While correcting, good ticks leave the counter where it is, so only a
//! counter that was already zero can end correction. In practice a box that
//! escalates stays `Critical` for the rest of the run. Tests pin this down.
//!
//! ## Alerts
//!
//! Escalation fires once per crossing: a correcting box never escalates
//! again, however high its counter climbs. Alert ids are UUIDs built from
//! the injected entropy and re-drawn if they collide with the existing log.

use alloc::vec::Vec;

use uuid::{Builder, Uuid};

use crate::{
    alerts::{AlertEvent, AlertLog, Escalation, ViolationCheck},
    entropy::EntropySource,
    generator::next_reading,
    model::{BoxStatus, Reading, ShipmentBox},
    settings::Settings,
    time::Timestamp,
};

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Re-draws allowed when a minted id is already taken
const MAX_ID_ATTEMPTS: usize = 8;

/// A box after one reading has been folded in
#[derive(Debug, Clone, PartialEq)]
pub struct BoxUpdate {
    /// Box after the reading
    pub next: ShipmentBox,
    /// Present only on the tick the box escalated
    pub escalation: Option<Escalation>,
}

/// Everything one tick produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Boxes in input order
    pub boxes: Vec<ShipmentBox>,
    /// Alerts raised this tick, in box order
    pub alerts: Vec<AlertEvent>,
}

/// Test a reading against this tick's thresholds
pub fn check_reading(reading: &Reading, settings: &Settings) -> ViolationCheck {
    ViolationCheck {
        temperature: settings.temperature_violated(reading.temperature),
        humidity: settings.humidity_violated(reading.humidity),
        shock: reading.shock,
    }
}

/// Fold one reading into a box
pub fn apply_reading(current: &ShipmentBox, reading: Reading, settings: &Settings) -> BoxUpdate {
    let check = check_reading(&reading, settings);
    let was_correcting = current.is_correcting();
    let threshold = settings.violation_threshold;

    let violations = if check.is_bad_tick() {
        current.consecutive_violations().saturating_add(1)
    } else if !was_correcting {
        current.consecutive_violations().saturating_sub(1)
    } else {
        current.consecutive_violations()
    };

    let mut status = current.status();
    let mut correcting = was_correcting;
    let mut escalation = None;

    if violations >= threshold && !was_correcting {
        status = BoxStatus::Critical;
        correcting = true;
        escalation = Some(Escalation {
            contributing: check.kinds(),
            temperature: reading.temperature,
        });
        log_info!(
            "{} escalated to Critical after {} violations ({}°C, {}%RH, shock={})",
            current.id(),
            violations,
            reading.temperature,
            reading.humidity,
            reading.shock
        );
    } else if violations > 0 && violations < threshold && !was_correcting {
        if current.status() != BoxStatus::AtRisk {
            log_debug!("{} at risk: {}/{} violations", current.id(), violations, threshold);
        }
        status = BoxStatus::AtRisk;
    } else if violations == 0 {
        if was_correcting {
            log_info!("{} stabilized, auto-correction off", current.id());
        }
        status = BoxStatus::Stable;
        correcting = false;
    }

    let mut next = current.clone();
    next.current_temperature = reading.temperature;
    next.current_humidity = reading.humidity;
    next.consecutive_violations = violations;
    next.status = status;
    next.is_correcting = correcting;
    next.readings.push(reading);

    BoxUpdate { next, escalation }
}

/// Advance every box by one tick
///
/// `settings` is the snapshot for this tick and applies to all boxes.
/// `existing_alerts` is only consulted to keep new alert ids unique.
pub fn advance_tick<E: EntropySource + ?Sized>(
    boxes: &[ShipmentBox],
    settings: &Settings,
    existing_alerts: &AlertLog,
    now: Timestamp,
    entropy: &mut E,
) -> TickOutcome {
    let mut outcome = TickOutcome {
        boxes: Vec::with_capacity(boxes.len()),
        alerts: Vec::new(),
    };

    for current in boxes {
        let reading = next_reading(current, settings, now, entropy);
        let BoxUpdate { next, escalation } = apply_reading(current, reading, settings);

        if let Some(escalation) = escalation {
            let id = mint_alert_id(entropy, existing_alerts, &outcome.alerts);
            outcome.alerts.push(escalation.into_alert(id, &next, now));
        }

        outcome.boxes.push(next);
    }

    outcome
}

/// Fresh alert id not present in the log or this tick's batch
fn mint_alert_id<E: EntropySource + ?Sized>(
    entropy: &mut E,
    existing: &AlertLog,
    fresh: &[AlertEvent],
) -> Uuid {
    let mut id = Uuid::nil();

    for _ in 0..MAX_ID_ATTEMPTS {
        let mut bytes = [0u8; 16];
        entropy.fill_bytes(&mut bytes);
        id = Builder::from_random_bytes(bytes).into_uuid();

        let taken = existing.contains_id(&id) || fresh.iter().any(|alert| alert.id == id);
        if !taken {
            break;
        }
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertKind;
    use crate::entropy::ScriptedEntropy;
    use crate::generator::WalkMode;

    fn settings(threshold: u32) -> Settings {
        Settings {
            temp_min: 2.0,
            temp_max: 8.0,
            humidity_max: 60.0,
            violation_threshold: threshold,
            tick_interval_ms: 1000,
        }
    }

    fn reading(temperature: f32) -> Reading {
        Reading {
            timestamp: 0,
            temperature,
            humidity: 45.0,
            shock: false,
        }
    }

    fn fresh_box() -> ShipmentBox {
        ShipmentBox::new("BOX-1", "Vaccines", "V-1", "Dock", 5.0, 45.0)
    }

    #[test]
    fn good_tick_on_stable_box_is_a_no_op() {
        let update = apply_reading(&fresh_box(), reading(5.0), &settings(3));

        assert_eq!(update.next.status(), BoxStatus::Stable);
        assert_eq!(update.next.consecutive_violations(), 0);
        assert!(update.escalation.is_none());
        assert_eq!(update.next.readings().len(), 1);
    }

    #[test]
    fn bad_tick_below_threshold_is_at_risk() {
        let update = apply_reading(&fresh_box(), reading(10.0), &settings(3));

        assert_eq!(update.next.consecutive_violations(), 1);
        assert_eq!(update.next.status(), BoxStatus::AtRisk);
        assert!(!update.next.is_correcting());
    }

    #[test]
    fn at_risk_decays_one_per_good_tick() {
        let s = settings(5);
        let mut b = fresh_box();
        for _ in 0..2 {
            b = apply_reading(&b, reading(10.0), &s).next;
        }
        assert_eq!(b.consecutive_violations(), 2);

        b = apply_reading(&b, reading(5.0), &s).next;
        assert_eq!(b.consecutive_violations(), 1);
        assert_eq!(b.status(), BoxStatus::AtRisk);

        b = apply_reading(&b, reading(5.0), &s).next;
        assert_eq!(b.consecutive_violations(), 0);
        assert_eq!(b.status(), BoxStatus::Stable);
    }

    #[test]
    fn escalation_on_reaching_threshold() {
        let s = settings(3);
        let mut b = fresh_box();
        let mut escalations = 0;

        for _ in 0..3 {
            let update = apply_reading(&b, reading(10.0), &s);
            escalations += update.escalation.is_some() as usize;
            b = update.next;
        }

        assert_eq!(b.status(), BoxStatus::Critical);
        assert!(b.is_correcting());
        assert_eq!(escalations, 1);
    }

    #[test]
    fn humidity_and_shock_count_as_violations() {
        let s = settings(1);
        let humid = Reading {
            humidity: 70.0,
            ..reading(5.0)
        };
        let update = apply_reading(&fresh_box(), humid, &s);
        assert_eq!(update.escalation.map(|e| e.kind()), Some(AlertKind::Humidity));

        let jolt = Reading {
            shock: true,
            ..reading(5.0)
        };
        let update = apply_reading(&fresh_box(), jolt, &s);
        assert_eq!(update.escalation.map(|e| e.kind()), Some(AlertKind::Shock));
    }

    #[test]
    fn drained_counter_ends_correction() {
        let s = settings(3);
        let mut correcting = fresh_box();
        correcting.status = BoxStatus::Critical;
        correcting.is_correcting = true;
        correcting.consecutive_violations = 0;

        let update = apply_reading(&correcting, reading(5.0), &s);
        let next = update.next;

        assert!(update.escalation.is_none());
        assert_eq!(next.status(), BoxStatus::Stable);
        assert_eq!(next.consecutive_violations(), 0);
        assert!(!next.is_correcting());
        assert_eq!(WalkMode::for_box(next.is_correcting(), &s), WalkMode::Normal);

        // Free walk again: no pull toward the 5 °C setpoint
        let warm = next.nudged(5.0);
        let mut entropy = ScriptedEntropy::neutral();
        let sampled = next_reading(&warm, &s, 0, &mut entropy);
        assert_eq!(sampled.temperature, 10.0);
    }

    #[test]
    fn input_box_is_not_mutated() {
        let before = fresh_box();
        let snapshot = before.clone();
        let _ = apply_reading(&before, reading(10.0), &settings(1));
        assert_eq!(before, snapshot);
    }

    #[test]
    fn advance_tick_covers_every_box_once() {
        let boxes = [fresh_box(), fresh_box(), fresh_box()];
        let mut entropy = ScriptedEntropy::neutral();

        let outcome = advance_tick(&boxes, &settings(3), &AlertLog::new(), 1_000, &mut entropy);

        assert_eq!(outcome.boxes.len(), 3);
        assert!(outcome.alerts.is_empty());
        // Three draws per box, no id minted
        assert_eq!(entropy.draws(), 9);
        for b in &outcome.boxes {
            assert_eq!(b.latest_reading().map(|r| r.timestamp), Some(1_000));
        }
    }

    #[test]
    fn minted_ids_avoid_existing_log() {
        let mut entropy = ScriptedEntropy::neutral();
        let first = mint_alert_id(&mut entropy, &AlertLog::new(), &[]);

        // Replay the same byte stream against a log that already holds `first`
        let mut replay = ScriptedEntropy::neutral();
        let mut log = AlertLog::new();
        let taken = Escalation {
            contributing: Default::default(),
            temperature: 5.0,
        }
        .into_alert(first, &fresh_box(), 0);
        log.record([taken]);

        let second = mint_alert_id(&mut replay, &log, &[]);
        assert_ne!(first, second);
    }
}
