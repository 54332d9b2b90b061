//! Count-up timer used by the trust bar statistics.
//!
//! The counter is driven by an external clock (`performance.now()` in the
//! browser) so the state machine itself stays deterministic and testable.

/// Animated counter that climbs from 0 to `target` over `duration_ms`.
///
/// The counter starts at most once. Samples are a pure function of the
/// start timestamp and the sampling timestamp, so a frame loop can call
/// [`CountUp::sample`] as often as it likes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms: f64::from(duration_ms),
            started_at: None,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Record the start timestamp. Returns `false` if the counter was
    /// already running, in which case the original start is kept.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    /// Fraction of the animation completed at `now_ms`, in `0.0..=1.0`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let progress = (now_ms - started_at) / self.duration_ms;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }

    /// Value to display at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> u32 {
        (self.progress(now_ms) * f64::from(self.target)).floor() as u32
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_started_shows_zero() {
        let counter = CountUp::new(10_000, 2000);
        assert_eq!(counter.progress(5_000.0), 0.0);
        assert_eq!(counter.sample(5_000.0), 0);
        assert!(!counter.is_finished(5_000.0));
    }

    #[test]
    fn test_start_only_once() {
        let mut counter = CountUp::new(100, 1000);
        assert!(counter.start(10.0));
        assert!(!counter.start(500.0));

        // Timing is still relative to the first start
        assert_eq!(counter.sample(510.0), 50);
    }

    #[test]
    fn test_midpoint_is_floored() {
        let mut counter = CountUp::new(3, 1000);
        counter.start(0.0);
        // 0.5 * 3 = 1.5
        assert_eq!(counter.sample(500.0), 1);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut counter = CountUp::new(42, 0);
        counter.start(100.0);
        assert_eq!(counter.sample(100.0), 42);
        assert!(counter.is_finished(100.0));
    }

    #[test]
    fn test_timestamp_before_start_clamps() {
        let mut counter = CountUp::new(1000, 1000);
        counter.start(1_000.0);
        assert_eq!(counter.sample(0.0), 0);
    }
}
