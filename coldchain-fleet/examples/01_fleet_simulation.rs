//! Fleet Simulation Example
//!
//! Runs the seeded three-box fleet on a fast timer, pushes one box out of its
//! safe band, and watches the engine escalate and then pull it back.
//!
//! ## What You'll Learn
//!
//! - Starting and stopping the background runner
//! - Changing settings while the fleet is ticking
//! - Operator nudges and what the next tick makes of them
//! - Exporting a dashboard snapshot as JSON
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_fleet_simulation
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use coldchain_core::SettingsPatch;
use coldchain_fleet::{Fleet, FleetResult, FleetRunner, SettingsHandle};
use parking_lot::Mutex;

fn main() -> FleetResult<()> {
    println!("=== Coldchain Fleet Simulation ===\n");

    let settings = SettingsHandle::default();
    settings.update(&SettingsPatch {
        tick_interval_ms: Some(100),
        ..Default::default()
    })?;

    let fleet = Arc::new(Mutex::new(Fleet::seeded(settings.clone())));
    print_fleet(&fleet.lock());

    let runner = FleetRunner::spawn(Arc::clone(&fleet));
    thread::sleep(Duration::from_millis(500));

    println!("\n--- Pushing BOX-102 up by 6°C ---");
    let temperature = fleet.lock().nudge_temperature("BOX-102", 6.0)?;
    println!("BOX-102 now reads {:.2}°C", temperature);

    thread::sleep(Duration::from_millis(800));
    print_fleet(&fleet.lock());

    println!("\n--- Tightening the humidity ceiling to 40% ---");
    match settings.update(&SettingsPatch {
        humidity_max: Some(40.0),
        ..Default::default()
    }) {
        Ok(s) => println!("Applied: humidity max {}%", s.humidity_max),
        Err(e) => println!("Rejected: {}", e),
    }

    println!("\n--- Trying an inverted range ---");
    if let Err(e) = settings.update(&SettingsPatch {
        temp_min: Some(10.0),
        ..Default::default()
    }) {
        println!("Rejected: {}", e);
    }

    thread::sleep(Duration::from_millis(800));
    let ticks = runner.stop()?;
    println!("\nRunner stopped after {} ticks", ticks);

    let fleet = fleet.lock();
    print_fleet(&fleet);

    println!("\nAlert log (newest first):");
    for alert in fleet.alerts().iter().take(10) {
        println!("  [{}] {} {}", alert.kind, alert.box_id, alert.message);
    }

    println!("\nSnapshot JSON:\n{}", fleet.snapshot_json()?);
    Ok(())
}

fn print_fleet(fleet: &Fleet) {
    let summary = fleet.summary();
    println!(
        "\nTick {}: {} stable, {} at risk, {} critical ({} correcting)",
        fleet.ticks(),
        summary.stable,
        summary.at_risk,
        summary.critical,
        summary.correcting
    );

    for b in fleet.boxes() {
        println!(
            "  {} {:<20} {:>6.2}°C {:>6.2}%  {:<8} violations={}",
            b.id(),
            b.name(),
            b.current_temperature(),
            b.current_humidity(),
            b.status(),
            b.consecutive_violations()
        );
    }
}
