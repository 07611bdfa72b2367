//! Background clock updater for the watch header.
//!
//! One writer thread rebuilds a whole ClockState snapshot once per second;
//! readers clone the snapshot from behind the lock. Replaces the
//! field-by-field unsynchronized writes a quick script would use with an
//! atomic snapshot swap.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Local;

use crate::models::clock_state::ClockState;

pub struct ClockHandle {
    shared: Arc<RwLock<ClockState>>,
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl ClockHandle {
    /// Spawn the updater thread. It runs until the handle is dropped.
    pub fn spawn() -> Self {
        let shared = Arc::new(RwLock::new(ClockState::at(&Local::now())));
        let stop = Arc::new(AtomicBool::new(false));

        let writer = Arc::clone(&shared);
        let stop_flag = Arc::clone(&stop);
        let join = thread::spawn(move || {
            while !stop_flag.load(Ordering::SeqCst) {
                let snapshot = ClockState::at(&Local::now());
                if let Ok(mut guard) = writer.write() {
                    *guard = snapshot;
                }
                thread::sleep(Duration::from_secs(1));
            }
        });

        Self {
            shared,
            stop,
            join: Some(join),
        }
    }

    /// Latest snapshot; at most one second stale.
    pub fn snapshot(&self) -> ClockState {
        self.shared
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}
