use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::engine_debug;
use seedvis_core::{Msg, TimerId};

/// Periodic playback advance.
///
/// A started timer sends `Msg::PlaybackTick { timer_id }` every interval
/// until cancelled. Cancelling an unknown or already cancelled timer is a
/// no-op.
pub trait Ticker {
    fn start(&mut self, timer_id: TimerId, interval: Duration, tx: mpsc::Sender<Msg>);
    fn cancel(&mut self, timer_id: TimerId);
}

/// Runs each timer on its own sleeping thread.
#[derive(Default)]
pub struct ThreadTicker {
    active: HashMap<TimerId, Arc<AtomicBool>>,
}

impl ThreadTicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ticker for ThreadTicker {
    fn start(&mut self, timer_id: TimerId, interval: Duration, tx: mpsc::Sender<Msg>) {
        let cancelled = Arc::new(AtomicBool::new(false));
        if let Some(previous) = self.active.insert(timer_id, cancelled.clone()) {
            previous.store(true, Ordering::Relaxed);
        }
        engine_debug!("Timer {} started ({:?})", timer_id, interval);

        thread::spawn(move || loop {
            thread::sleep(interval);
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            if tx.send(Msg::PlaybackTick { timer_id }).is_err() {
                break;
            }
        });
    }

    fn cancel(&mut self, timer_id: TimerId) {
        if let Some(flag) = self.active.remove(&timer_id) {
            flag.store(true, Ordering::Relaxed);
            engine_debug!("Timer {} cancelled", timer_id);
        }
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        for flag in self.active.values() {
            flag.store(true, Ordering::Relaxed);
        }
    }
}
