use crate::constants::DEFAULT_CYCLE_SECS;
use std::time::Duration;

/// Maps elapsed time onto a repeating phase in `[0, 1)`.
///
/// The phase is always derived from the absolute elapsed time, never
/// accumulated, so it cannot drift however long the page stays open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleClock {
    period: Duration,
}

impl Default for CycleClock {
    fn default() -> Self {
        Self::from_secs_f32(DEFAULT_CYCLE_SECS)
    }
}

impl CycleClock {
    pub fn new(period: Duration) -> Self {
        if period.is_zero() {
            return Self::default();
        }
        Self { period }
    }

    /// Non-positive or non-finite periods fall back to the default cycle.
    pub fn from_secs_f32(secs: f32) -> Self {
        let period = Duration::try_from_secs_f64(secs as f64)
            .ok()
            .filter(|p| !p.is_zero())
            .unwrap_or(Duration::from_secs_f64(DEFAULT_CYCLE_SECS as f64));
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn phase(&self, elapsed: Duration) -> f32 {
        let period = self.period.as_nanos().max(1);
        let within = elapsed.as_nanos() % period;
        let phase = (within as f64 / period as f64) as f32;
        // f32 rounding can land exactly on 1.0; that instant is the wrap point
        if phase >= 1.0 {
            0.0
        } else {
            phase
        }
    }
}

/// Elapsed time between two host timestamps in milliseconds.
///
/// Timestamps that run backwards or are not finite count as zero elapsed.
pub fn elapsed_between(origin_ms: f64, now_ms: f64) -> Duration {
    let delta = (now_ms - origin_ms) / 1000.0;
    if delta > 0.0 {
        Duration::try_from_secs_f64(delta).unwrap_or(Duration::ZERO)
    } else {
        Duration::ZERO
    }
}
