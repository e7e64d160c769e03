//! Cancellable repeating tick scheduler.
//!
//! `Ticker::spawn` starts a timer thread that sends one tick per interval
//! over an mpsc channel. Cancellation is scoped to the handle: dropping the
//! `Ticker` (or calling `cancel()`) stops the thread and joins it, so no
//! timer outlives its consumer. The thread also exits on its own when the
//! tick receiver is dropped.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use vigil_contracts::{VigilError, VigilResult};

/// Handle to a running timer thread.
///
/// ```rust,ignore
/// let (ticker, ticks) = Ticker::spawn(Duration::from_millis(3000));
/// for tick in ticks {
///     store.advance_vitals(&mut rng);
/// }
/// drop(ticker); // stops and joins the thread
/// ```
pub struct Ticker {
    stop: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a timer thread emitting one `Instant` per `interval`.
    pub fn spawn(interval: Duration) -> (Self, Receiver<Instant>) {
        let (tick_tx, tick_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            debug!(interval_ms = interval.as_millis() as u64, "ticker started");
            loop {
                match stop_rx.recv_timeout(interval) {
                    // The interval elapsed without a stop request.
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(Instant::now()).is_err() {
                            // Tick receiver dropped; nobody is listening.
                            break;
                        }
                    }
                    // Explicit cancel, or the handle itself was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("ticker stopped");
        });

        (
            Self {
                stop: stop_tx,
                handle: Some(handle),
            },
            tick_rx,
        )
    }

    /// Stop the timer thread and wait for it to exit.
    ///
    /// Dropping the handle has the same effect; `cancel` additionally
    /// surfaces a panic on the timer thread as `SchedulerError`.
    pub fn cancel(mut self) -> VigilResult<()> {
        self.shutdown()
            .map_err(|reason| VigilError::SchedulerError { reason })
    }

    fn shutdown(&mut self) -> Result<(), String> {
        // Wakes the thread immediately even mid-interval.
        let _ = self.stop.send(());
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| "tick thread panicked".to_string()),
            None => Ok(()),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_repeated_ticks() {
        let (ticker, ticks) = Ticker::spawn(Duration::from_millis(10));

        for _ in 0..3 {
            ticks
                .recv_timeout(Duration::from_secs(2))
                .expect("tick not delivered");
        }

        ticker.cancel().unwrap();
    }

    #[test]
    fn drop_stops_the_tick_stream() {
        let (ticker, ticks) = Ticker::spawn(Duration::from_millis(10));
        ticks
            .recv_timeout(Duration::from_secs(2))
            .expect("tick not delivered");

        drop(ticker);

        // Drain anything sent before the stop landed, then observe disconnect.
        loop {
            match ticks.recv_timeout(Duration::from_millis(100)) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => panic!("ticker thread still running"),
            }
        }
    }

    #[test]
    fn cancel_mid_interval_returns_promptly() {
        // A long interval must not delay cancellation.
        let (ticker, _ticks) = Ticker::spawn(Duration::from_secs(3600));
        let started = Instant::now();

        ticker.cancel().unwrap();

        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
