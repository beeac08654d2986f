use std::time::{Duration, Instant};

use crate::foundation::core::Fps;
use crate::foundation::error::TweenlabResult;
use crate::timeline::state::TimelineState;

/// Fixed-period tick schedule fed with elapsed wall time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    period: Duration,
    pending: Duration,
}

impl FrameClock {
    pub fn new(fps: Fps) -> Self {
        Self {
            period: fps.frame_period(),
            pending: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `elapsed` and return how many whole periods are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if self.period.is_zero() {
            return 0;
        }
        let pending = self.pending.saturating_add(elapsed).as_nanos();
        let period = self.period.as_nanos();
        self.pending = Duration::from_nanos(u64::try_from(pending % period).unwrap_or(0));
        u64::try_from(pending / period).unwrap_or(u64::MAX)
    }

    /// Drop any partially accumulated period.
    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }
}

/// Applies clock ticks to a timeline. Ticks only count while the timeline is playing.
#[derive(Clone, Copy, Debug)]
pub struct TimelineDriver {
    clock: FrameClock,
}

impl Default for TimelineDriver {
    fn default() -> Self {
        Self::new(Fps::DEMO)
    }
}

impl TimelineDriver {
    pub fn new(fps: Fps) -> Self {
        Self {
            clock: FrameClock::new(fps),
        }
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Feed `elapsed` wall time. Returns the number of ticks that fell due.
    pub fn advance(&mut self, state: &mut TimelineState, elapsed: Duration) -> u64 {
        if !state.is_playing() {
            self.clock.reset();
            return 0;
        }
        let due = self.clock.advance(elapsed);
        // Whole laps land on the same frame.
        for _ in 0..due % state.total_frames() {
            state.tick();
        }
        due
    }

    /// Sleep-driven loop: calls `on_tick` once per period, `ticks` times.
    ///
    /// `on_tick` receives the tick number and performs the actual state change. Returning an
    /// error stops the loop.
    pub fn run_realtime<F>(&mut self, ticks: u64, mut on_tick: F) -> TweenlabResult<()>
    where
        F: FnMut(u64) -> TweenlabResult<()>,
    {
        let mut done = 0;
        let mut last = Instant::now();
        self.clock.reset();
        while done < ticks {
            std::thread::sleep(self.clock.period());
            let now = Instant::now();
            let due = self.clock.advance(now - last);
            last = now;
            for _ in 0..due.min(ticks - done) {
                on_tick(done)?;
                done += 1;
            }
        }
        tracing::debug!(ticks, "realtime run finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/driver.rs"]
mod tests;
