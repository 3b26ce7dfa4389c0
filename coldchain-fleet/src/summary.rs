//! Read-only views for display collaborators
//!
//! Dashboards never see the engine's internals directly. They get a
//! [`FleetSnapshot`] that borrows the fleet state for the duration of a read,
//! plus a few derived flags the status cards need.

use coldchain_core::{AlertLog, BoxStatus, Settings, ShipmentBox};
use serde::Serialize;

/// Counts across the fleet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total: usize,
    pub stable: usize,
    pub at_risk: usize,
    pub critical: usize,
    /// Boxes with auto-correction engaged
    pub correcting: usize,
    pub unresolved_alerts: usize,
}

impl FleetSummary {
    pub fn collect(boxes: &[ShipmentBox], alerts: &AlertLog) -> Self {
        let mut summary = FleetSummary {
            total: boxes.len(),
            unresolved_alerts: alerts.unresolved(),
            ..Default::default()
        };

        for b in boxes {
            match b.status() {
                BoxStatus::Stable => summary.stable += 1,
                BoxStatus::AtRisk => summary.at_risk += 1,
                BoxStatus::Critical => summary.critical += 1,
            }
            if b.is_correcting() {
                summary.correcting += 1;
            }
        }

        summary
    }
}

/// One box plus the range flags shown next to its live values
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxView<'a> {
    #[serde(flatten)]
    pub state: &'a ShipmentBox,
    pub temperature_in_range: bool,
    pub humidity_in_range: bool,
}

impl<'a> BoxView<'a> {
    pub fn new(state: &'a ShipmentBox, settings: &Settings) -> Self {
        Self {
            state,
            temperature_in_range: !settings.temperature_violated(state.current_temperature()),
            humidity_in_range: !settings.humidity_violated(state.current_humidity()),
        }
    }
}

/// Everything a dashboard renders, borrowed from the fleet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSnapshot<'a> {
    pub tick: u64,
    pub settings: Settings,
    pub summary: FleetSummary,
    pub boxes: Vec<BoxView<'a>>,
    pub alerts: &'a AlertLog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use coldchain_core::{apply_reading, Reading};

    fn warm() -> Reading {
        Reading {
            timestamp: 0,
            temperature: 10.0,
            humidity: 45.0,
            shock: false,
        }
    }

    #[test]
    fn summary_counts_statuses() {
        let settings = Settings {
            violation_threshold: 2,
            ..Settings::default()
        };
        let stable = ShipmentBox::new("A", "a", "1", "x", 5.0, 45.0);
        let at_risk = apply_reading(&stable, warm(), &settings).next;
        let critical = apply_reading(&at_risk, warm(), &settings).next;

        let summary = FleetSummary::collect(&[stable, at_risk, critical], &AlertLog::new());

        assert_eq!(summary.total, 3);
        assert_eq!(summary.stable, 1);
        assert_eq!(summary.at_risk, 1);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.correcting, 1);
        assert_eq!(summary.unresolved_alerts, 0);
    }

    #[test]
    fn view_flags_follow_settings() {
        let settings = Settings::default();
        let b = ShipmentBox::new("A", "a", "1", "x", 9.0, 61.0);
        let view = BoxView::new(&b, &settings);

        assert!(!view.temperature_in_range);
        assert!(!view.humidity_in_range);
    }
}
