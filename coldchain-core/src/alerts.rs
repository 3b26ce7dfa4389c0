//! Escalation Alerts and the Bounded Alert Log
//!
//! ## Overview
//!
//! An [`AlertEvent`] records one escalation: the moment a box's violation
//! counter reaches the threshold while it was not already correcting. The
//! engine decides *that* a box escalated and *why* (an [`Escalation`]); turning
//! that into a stored alert adds the identity, box and timestamp.
//!
//! ## Alert Kind
//!
//! Each tick checks three independent conditions:
//!
//! ```text
//! temperature outside [tempMin, tempMax]  → Temperature
//! humidity above humidityMax              → Humidity
//! shock detected                          → Shock
//! ```
//!
//! One contributing condition names the alert; two or more make it
//! `Combined`. The contributing list never exceeds three entries, so it is
//! held in a `heapless::Vec` rather than on the heap.
//!
//! ## Log Ordering
//!
//! The [`AlertLog`] is newest first and holds at most
//! [`ALERT_LOG_CAPACITY`](crate::constants::ALERT_LOG_CAPACITY) entries.
//! Recording a batch puts the whole batch ahead of older alerts, keeping the
//! batch's own order, then drops whatever fell off the end.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{constants::ALERT_LOG_CAPACITY, model::ShipmentBox, time::Timestamp};

/// What tripped an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    /// Reading outside the safe temperature band
    Temperature,
    /// Humidity above the ceiling
    Humidity,
    /// Accelerometer jolt
    Shock,
    /// More than one of the above on the escalating tick
    Combined,
}

impl AlertKind {
    /// Wire name, also used in messages
    pub const fn name(&self) -> &'static str {
        match self {
            AlertKind::Temperature => "Temperature",
            AlertKind::Humidity => "Humidity",
            AlertKind::Shock => "Shock",
            AlertKind::Combined => "Combined",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reserved; the engine only raises critical alerts
    Warning,
    /// Box escalated to `Critical`
    Critical,
}

/// Conditions violated on a single tick, in check order
///
/// Capacity 3: temperature, humidity, shock.
pub type ViolationKinds = heapless::Vec<AlertKind, 3>;

/// Result of checking one reading against the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViolationCheck {
    /// Temperature outside the band
    pub temperature: bool,
    /// Humidity above the ceiling
    pub humidity: bool,
    /// Shock reported
    pub shock: bool,
}

impl ViolationCheck {
    /// Any condition violated
    pub fn is_bad_tick(&self) -> bool {
        self.temperature || self.humidity || self.shock
    }

    /// Violated conditions in check order
    pub fn kinds(&self) -> ViolationKinds {
        let mut kinds = ViolationKinds::new();
        // Three flags, three slots: pushes cannot overflow
        if self.temperature {
            let _ = kinds.push(AlertKind::Temperature);
        }
        if self.humidity {
            let _ = kinds.push(AlertKind::Humidity);
        }
        if self.shock {
            let _ = kinds.push(AlertKind::Shock);
        }
        kinds
    }
}

/// Engine verdict that a box escalated this tick
#[derive(Debug, Clone, PartialEq)]
pub struct Escalation {
    /// Conditions violated on the escalating tick
    pub contributing: ViolationKinds,
    /// Temperature of the escalating reading
    pub temperature: f32,
}

impl Escalation {
    /// Single contributor names the alert, several make it `Combined`
    ///
    /// The threshold can also be crossed on a clean tick when the operator
    /// lowers it; such alerts are filed under `Temperature`.
    pub fn kind(&self) -> AlertKind {
        match self.contributing.as_slice() {
            [] => AlertKind::Temperature,
            [single] => *single,
            _ => AlertKind::Combined,
        }
    }

    /// Operator-facing description
    pub fn message(&self) -> String {
        let listed = if self.contributing.is_empty() {
            String::from("none")
        } else {
            let mut listed = String::new();
            for (i, kind) in self.contributing.iter().enumerate() {
                if i > 0 {
                    listed.push_str(", ");
                }
                listed.push_str(kind.name());
            }
            listed
        };

        format!(
            "Sequential violation detected: {}. Value: {}°C",
            listed, self.temperature
        )
    }

    /// Materialize as a stored alert
    pub fn into_alert(self, id: Uuid, subject: &ShipmentBox, timestamp: Timestamp) -> AlertEvent {
        AlertEvent {
            id,
            box_id: String::from(subject.id()),
            box_name: String::from(subject.name()),
            kind: self.kind(),
            message: self.message(),
            timestamp,
            severity: Severity::Critical,
            resolved: false,
        }
    }
}

/// One recorded escalation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    /// Unique across the log
    pub id: Uuid,
    /// Id of the escalating box
    pub box_id: String,
    /// Display name of the escalating box
    pub box_name: String,
    /// What tripped it
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// Operator-facing text
    pub message: String,
    /// Tick time
    pub timestamp: Timestamp,
    /// Always critical for escalations
    pub severity: Severity,
    /// No resolution workflow exists; always false
    pub resolved: bool,
}

/// Capped alert history, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AlertLog {
    entries: VecDeque<AlertEvent>,
}

impl AlertLog {
    /// Empty log
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(ALERT_LOG_CAPACITY),
        }
    }

    /// Put a batch ahead of older alerts, then trim to capacity
    pub fn record<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = AlertEvent>,
        I::IntoIter: DoubleEndedIterator,
    {
        for alert in batch.into_iter().rev() {
            self.entries.push_front(alert);
        }
        self.entries.truncate(ALERT_LOG_CAPACITY);
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &AlertEvent> {
        self.entries.iter()
    }

    /// Most recent alert
    pub fn latest(&self) -> Option<&AlertEvent> {
        self.entries.front()
    }

    /// Alerts held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is held
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an alert with this id is held
    pub fn contains_id(&self, id: &Uuid) -> bool {
        self.entries.iter().any(|alert| &alert.id == id)
    }

    /// Alerts not yet resolved
    pub fn unresolved(&self) -> usize {
        self.entries.iter().filter(|alert| !alert.resolved).count()
    }

    /// Drop every alert
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
