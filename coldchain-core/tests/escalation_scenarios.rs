//! Escalation scenarios for the violation & status engine
//!
//! Each test feeds a fixed reading sequence and checks the counter, status,
//! correction flag and alerts that come out. Together they pin down the
//! hysteresis rules: linear decay outside correction, sticky correction once
//! escalated, and one alert per crossing.

mod common;

use coldchain_core::{
    advance_tick,
    entropy::ScriptedEntropy,
    AlertKind, AlertLog, BoxStatus, Reading,
};

use common::*;

#[test]
fn three_warm_ticks_escalate_once() {
    let settings = cold_chain_settings(3);
    let run = replay(test_box(), &[too_warm(), too_warm(), too_warm()], &settings);

    let statuses: Vec<BoxStatus> = run.boxes.iter().map(|b| b.status()).collect();
    assert_eq!(
        statuses,
        vec![BoxStatus::AtRisk, BoxStatus::AtRisk, BoxStatus::Critical]
    );
    assert!(run.final_box.is_correcting());
    assert_eq!(run.final_box.consecutive_violations(), 3);
    assert_eq!(run.alert_kinds, vec![AlertKind::Temperature]);
}

/// While correcting, good ticks neither decrement the counter nor release
/// correction. A box that escalated with a non-zero counter therefore stays
/// Critical indefinitely.
#[test]
fn compliant_ticks_while_correcting_leave_counter_alone() {
    let settings = cold_chain_settings(3);
    let readings = [
        too_warm(),
        too_warm(),
        too_warm(),
        compliant(),
        compliant(),
        compliant(),
    ];
    let run = replay(test_box(), &readings, &settings);

    for b in &run.boxes[3..] {
        assert_eq!(b.consecutive_violations(), 3);
        assert_eq!(b.status(), BoxStatus::Critical);
        assert!(b.is_correcting());
    }
    assert_eq!(run.alert_kinds.len(), 1);
}

#[test]
fn correcting_box_never_drains_on_its_own() {
    let settings = cold_chain_settings(2);
    let mut readings = vec![too_warm(), too_warm()];
    readings.extend(std::iter::repeat(compliant()).take(200));

    let run = replay(test_box(), &readings, &settings);

    assert_eq!(run.final_box.status(), BoxStatus::Critical);
    assert_eq!(run.final_box.consecutive_violations(), 2);
}

#[test]
fn no_second_alert_while_correcting() {
    let settings = cold_chain_settings(2);
    let readings: Vec<Reading> = std::iter::repeat(too_warm()).take(10).collect();

    let run = replay(test_box(), &readings, &settings);

    assert_eq!(run.alert_kinds.len(), 1);
    // Counter keeps climbing past the threshold
    assert_eq!(run.final_box.consecutive_violations(), 10);
}

#[test]
fn threshold_one_escalates_on_first_bad_tick() {
    let settings = cold_chain_settings(1);
    let run = replay(test_box(), &[too_warm()], &settings);

    assert_eq!(run.final_box.status(), BoxStatus::Critical);
    assert!(run.final_box.is_correcting());
    assert_eq!(run.alert_kinds, vec![AlertKind::Temperature]);
}

#[test]
fn cold_excursion_counts_like_warm() {
    let settings = cold_chain_settings(1);
    let run = replay(test_box(), &[at_temperature(1.5)], &settings);
    assert_eq!(run.alert_kinds, vec![AlertKind::Temperature]);
}

#[test]
fn recovery_from_at_risk_takes_as_many_good_ticks() {
    let settings = cold_chain_settings(10);
    let mut readings = vec![too_warm(); 4];
    readings.extend(vec![compliant(); 4]);

    let run = replay(test_box(), &readings, &settings);

    let counters: Vec<u32> = run.boxes.iter().map(|b| b.consecutive_violations()).collect();
    assert_eq!(counters, vec![1, 2, 3, 4, 3, 2, 1, 0]);
    assert_eq!(run.boxes[6].status(), BoxStatus::AtRisk);
    assert_eq!(run.final_box.status(), BoxStatus::Stable);
}

#[test]
fn interleaved_good_ticks_delay_escalation() {
    let settings = cold_chain_settings(3);
    // +1 +1 -1 +1 +1 → reaches 3 on the fifth tick
    let readings = [too_warm(), too_warm(), compliant(), too_warm(), too_warm()];
    let run = replay(test_box(), &readings, &settings);

    assert_eq!(run.boxes[3].status(), BoxStatus::AtRisk);
    assert_eq!(run.final_box.status(), BoxStatus::Critical);
    assert_eq!(run.alert_kinds.len(), 1);
}

#[test]
fn combined_alert_lists_every_contributor() {
    let settings = cold_chain_settings(1);
    let everything = Reading {
        timestamp: 0,
        temperature: 12.5,
        humidity: 80.0,
        shock: true,
    };

    let update = coldchain_core::apply_reading(&test_box(), everything, &settings);
    let escalation = update.escalation.expect("threshold 1 escalates immediately");

    assert_eq!(escalation.kind(), AlertKind::Combined);
    assert_eq!(
        escalation.message(),
        "Sequential violation detected: Temperature, Humidity, Shock. Value: 12.5°C"
    );
}

#[test]
fn lowering_threshold_mid_run_escalates_on_next_tick() {
    let lenient = cold_chain_settings(10);
    let strict = cold_chain_settings(2);

    let warmed = replay(test_box(), &[too_warm(), too_warm(), too_warm()], &lenient);
    assert_eq!(warmed.final_box.status(), BoxStatus::AtRisk);

    // Good tick decays 3 → 2, which now meets the stricter threshold
    let run = replay(warmed.final_box, &[compliant()], &strict);
    assert_eq!(run.final_box.status(), BoxStatus::Critical);
    assert_eq!(run.alert_kinds, vec![AlertKind::Temperature]);
}

#[test]
fn history_keeps_last_twenty_readings() {
    let settings = cold_chain_settings(3);
    let readings = vec![compliant(); 45];

    let run = replay(test_box(), &readings, &settings);
    let history = run.final_box.readings();

    assert_eq!(history.len(), 20);
    let first = history.iter().next().map(|r| r.timestamp);
    assert_eq!(first, Some(26));
    assert_eq!(history.last().map(|r| r.timestamp), Some(45));
}

#[test]
fn advance_tick_emits_alert_with_box_identity() {
    let settings = cold_chain_settings(1);
    let boxes = vec![test_box().nudged(20.0)];
    // Zero temperature step, zero humidity step, no shock, then id bytes
    let mut entropy = ScriptedEntropy::new(&[0.5, 0.5, 0.5]);

    let outcome = advance_tick(&boxes, &settings, &AlertLog::new(), 42_000, &mut entropy);

    assert_eq!(outcome.alerts.len(), 1);
    let alert = &outcome.alerts[0];
    assert_eq!(alert.box_id, "BOX-101");
    assert_eq!(alert.box_name, "Vaccine Batch Alpha");
    assert_eq!(alert.kind, AlertKind::Temperature);
    assert_eq!(alert.timestamp, 42_000);
    assert!(!alert.resolved);
    assert_eq!(
        alert.message,
        "Sequential violation detected: Temperature. Value: 24.5°C"
    );

    // Input slice untouched
    assert_eq!(boxes[0].status(), BoxStatus::Stable);
    assert_eq!(outcome.boxes[0].status(), BoxStatus::Critical);
}
