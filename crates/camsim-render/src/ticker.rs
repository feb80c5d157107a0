//! Fixed-interval frame scheduling.

use std::time::{Duration, Instant};

/// Decides when the next frame is due.
///
/// Time is supplied by the caller so the schedule can be driven by the event
/// loop in the application and by synthetic instants in tests.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval: Duration,
    next: Option<Instant>,
    frames: u64,
}

impl FrameTicker {
    /// Creates a ticker firing every `interval`. The first poll always fires.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next: None,
            frames: 0,
        }
    }

    /// Creates a ticker from an interval in milliseconds.
    #[must_use]
    pub fn from_millis(interval_ms: u64) -> Self {
        Self::new(Duration::from_millis(interval_ms))
    }

    /// Returns true if a frame is due at `now` and schedules the next one.
    ///
    /// After a stall the schedule restarts from `now` rather than firing a
    /// burst of catch-up frames.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now < deadline => false,
            Some(deadline) => {
                let next = deadline + self.interval;
                self.next = Some(if next <= now { now + self.interval } else { next });
                self.frames += 1;
                true
            }
            None => {
                self.next = Some(now + self.interval);
                self.frames += 1;
                true
            }
        }
    }

    /// Deadline of the next frame, if the ticker has started.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of frames fired so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_first_poll_fires() {
        let start = Instant::now();
        let mut ticker = FrameTicker::from_millis(50);
        assert!(ticker.next_deadline().is_none());
        assert!(ticker.poll(start));
        assert_eq!(ticker.next_deadline(), Some(start + 50 * MS));
    }

    #[test]
    fn test_fires_at_fixed_interval() {
        let start = Instant::now();
        let mut ticker = FrameTicker::from_millis(50);
        assert!(ticker.poll(start));
        assert!(!ticker.poll(start + 10 * MS));
        assert!(!ticker.poll(start + 49 * MS));
        assert!(ticker.poll(start + 50 * MS));
        // Small lateness does not shift the schedule
        assert!(ticker.poll(start + 103 * MS));
        assert_eq!(ticker.next_deadline(), Some(start + 150 * MS));
        assert_eq!(ticker.frame_count(), 3);
    }

    #[test]
    fn test_stall_does_not_burst() {
        let start = Instant::now();
        let mut ticker = FrameTicker::from_millis(50);
        assert!(ticker.poll(start));
        assert!(ticker.poll(start + 500 * MS));
        assert!(!ticker.poll(start + 510 * MS));
        assert_eq!(ticker.next_deadline(), Some(start + 550 * MS));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let ticker = FrameTicker::new(Duration::ZERO);
        assert_eq!(ticker.interval(), MS);
    }
}
