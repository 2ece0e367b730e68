//! Clock pacing.
//!
//! The clock does not own a thread. The caller's run loop asks it to wait
//! for the next edge between steps; `start`/`stop` only flip its state.

use std::thread;
use std::time::{Duration, Instant};

/// Fixed-period clock.
#[derive(Clone, Debug)]
pub struct Clock {
    period: Duration,
    running: bool,
    next_edge: Option<Instant>,
}

impl Clock {
    /// Creates a stopped clock. A zero period never sleeps.
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            running: false,
            next_edge: None,
        }
    }

    /// Creates a stopped clock with a period in microseconds.
    pub const fn from_micros(period_us: u64) -> Self {
        Self::new(Duration::from_micros(period_us))
    }

    /// Returns the tick period.
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Starts the clock. Starting a running clock does nothing.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.next_edge = Some(Instant::now());
            tracing::debug!(period_us = self.period.as_micros(), "clock started");
        }
    }

    /// Stops the clock. Stopping a stopped clock does nothing.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.next_edge = None;
            tracing::debug!("clock stopped");
        }
    }

    /// Returns true between [`Clock::start`] and [`Clock::stop`].
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Blocks until the next clock edge, then schedules the one after it.
    ///
    /// Returns immediately when the clock is stopped or free-running.
    pub fn wait_edge(&mut self) {
        if self.period.is_zero() {
            return;
        }
        let Some(edge) = self.next_edge else {
            return;
        };
        let now = Instant::now();
        if edge > now {
            thread::sleep(edge - now);
        }
        // A late edge resynchronizes instead of bursting to catch up.
        self.next_edge = Some(edge.max(now) + self.period);
    }
}
