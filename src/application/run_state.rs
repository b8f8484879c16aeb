use std::time::Duration;

/// Repeating timer that fires once per `interval` of accumulated frame time.
///
/// Only exists while the simulation is running; dropping it cancels every
/// future tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    elapsed: Duration,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "ticker interval must be non-zero");
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `dt` of frame time; returns true if a tick is due.
    ///
    /// Fires at most once per call. Time owed beyond one interval is dropped,
    /// so a long frame never produces a burst of catch-up ticks.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);

        if self.elapsed < self.interval {
            return false;
        }

        self.elapsed -= self.interval;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
        }
        true
    }
}

/// Whether the simulation is ticking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running(Ticker),
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running(_))
    }

    /// Returns false if already running
    pub fn start(&mut self, interval: Duration) -> bool {
        if self.is_running() {
            return false;
        }

        *self = RunState::Running(Ticker::new(interval));
        true
    }

    /// Returns false if already stopped
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        *self = RunState::Stopped;
        true
    }

    /// Feed frame time to the ticker, if any; returns true if a tick is due
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self {
            RunState::Stopped => false,
            RunState::Running(ticker) => ticker.advance(dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn test_ticker_fires_on_interval() {
        let mut ticker = Ticker::new(INTERVAL);

        assert!(!ticker.advance(Duration::from_millis(60)));
        assert!(ticker.advance(Duration::from_millis(60)));
        // 20ms carried over
        assert!(!ticker.advance(Duration::from_millis(60)));
        assert!(ticker.advance(Duration::from_millis(20)));
    }

    #[test]
    fn test_ticker_drops_backlog() {
        let mut ticker = Ticker::new(INTERVAL);

        assert!(ticker.advance(Duration::from_secs(5)));
        assert!(!ticker.advance(Duration::from_millis(1)));
    }

    #[test]
    fn test_huge_frame_time_saturates() {
        let mut state = RunState::default();
        state.start(INTERVAL);

        assert!(!state.advance(Duration::from_millis(50)));
        assert!(state.advance(Duration::MAX));
        assert!(!state.advance(Duration::from_millis(1)));
        assert!(state.advance(Duration::from_millis(100)));
    }

    #[test]
    fn test_start_stop_transitions() {
        let mut state = RunState::default();
        assert!(!state.is_running());

        assert!(state.start(INTERVAL));
        assert!(!state.start(INTERVAL));
        assert!(state.is_running());

        assert!(state.stop());
        assert!(!state.stop());
        assert_eq!(state, RunState::Stopped);
    }

    #[test]
    fn test_no_tick_after_stop() {
        let mut state = RunState::default();
        state.start(INTERVAL);
        assert!(!state.advance(Duration::from_millis(99)));

        state.stop();
        assert!(!state.advance(Duration::from_secs(10)));
    }

    #[test]
    fn test_restart_begins_fresh_interval() {
        let mut state = RunState::default();
        state.start(INTERVAL);
        state.advance(Duration::from_millis(90));
        state.stop();

        state.start(INTERVAL);
        assert!(!state.advance(Duration::from_millis(20)));
    }
}
