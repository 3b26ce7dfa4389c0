//! Background tick loop
//!
//! Ticks a shared [`Fleet`] on its own thread at the configured cadence. The
//! interval is re-read from the settings after every tick, so a cadence change
//! takes effect on the next wait. Stopping just means no further ticks: the
//! fleet keeps whatever state the last tick left.
//!
//! The fleet lock is held only while a tick runs. Readers (dashboards,
//! operator actions) take the same lock between ticks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::{
    errors::{FleetError, FleetResult},
    fleet::Fleet,
};

/// Fleet shared between the runner and its readers
pub type SharedFleet = Arc<Mutex<Fleet>>;

/// Longest single sleep, bounds how late a stop request is noticed
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Handle to a running tick loop
pub struct FleetRunner {
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<u64>>,
}

impl FleetRunner {
    /// Start ticking; the first tick fires one interval from now
    pub fn spawn(fleet: SharedFleet) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let worker = {
            let stop = Arc::clone(&stop);
            thread::spawn(move || run_loop(&fleet, &stop))
        };

        log::info!("Fleet runner started");

        Self {
            stop,
            worker: Some(worker),
        }
    }

    /// False once the loop has exited
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .map(|worker| !worker.is_finished())
            .unwrap_or(false)
    }

    /// Stop ticking and wait for the loop to exit; returns ticks run
    pub fn stop(mut self) -> FleetResult<u64> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> FleetResult<u64> {
        self.stop.store(true, Ordering::Release);

        let worker = self.worker.take().ok_or(FleetError::RunnerAlreadyStopped)?;
        let ticks = worker.join().map_err(|_| FleetError::RunnerAlreadyStopped)?;

        log::info!("Fleet runner stopped after {} ticks", ticks);
        Ok(ticks)
    }
}

impl Drop for FleetRunner {
    fn drop(&mut self) {
        if self.worker.is_some() {
            let _ = self.shutdown();
        }
    }
}

fn run_loop(fleet: &Mutex<Fleet>, stop: &AtomicBool) -> u64 {
    let mut ticks = 0u64;
    let mut interval = current_interval(fleet);

    loop {
        if !wait(interval, stop) {
            break;
        }

        let mut guard = fleet.lock();
        guard.tick();
        interval = Duration::from_millis(guard.settings().snapshot().tick_interval_ms);
        drop(guard);

        ticks += 1;
    }

    ticks
}

fn current_interval(fleet: &Mutex<Fleet>) -> Duration {
    Duration::from_millis(fleet.lock().settings().snapshot().tick_interval_ms)
}

/// Sleep for `interval` in short slices; false if a stop was requested
fn wait(interval: Duration, stop: &AtomicBool) -> bool {
    let deadline = Instant::now() + interval;

    loop {
        if stop.load(Ordering::Acquire) {
            return false;
        }

        let now = Instant::now();
        if now >= deadline {
            return true;
        }

        thread::sleep((deadline - now).min(STOP_POLL_INTERVAL));
    }
}
