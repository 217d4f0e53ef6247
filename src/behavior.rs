//! Randomized autonomous behaviors
//!
//! Blinking and idle wandering are plain deadlines checked once per frame,
//! not scheduled callbacks. When a deadline has passed it is rescheduled a
//! random interval after `now`.

use embassy_time::{Duration, Instant};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::config::{BehaviorTimings, Interval};
use crate::position::LegalRange;

#[derive(Debug, Clone)]
pub(crate) struct Behaviors {
    timings: BehaviorTimings,
    blink_deadline: Instant,
    idle_deadline: Instant,
    rng: SmallRng,
}

impl Behaviors {
    /// Both deadlines start expired so the first open frame blinks
    pub(crate) fn new(timings: BehaviorTimings, seed: u64) -> Self {
        Self {
            timings,
            blink_deadline: Instant::from_millis(0),
            idle_deadline: Instant::from_millis(0),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Check the blink deadline, rescheduling it when it fires
    pub(crate) fn blink_due(&mut self, now: Instant) -> bool {
        if now < self.blink_deadline {
            return false;
        }
        self.blink_deadline = now + random_delay(&mut self.rng, self.timings.blink);
        true
    }

    /// Check the idle deadline, returning a new gaze target when it fires
    pub(crate) fn idle_target(&mut self, now: Instant, range: LegalRange) -> Option<(f32, f32)> {
        if now < self.idle_deadline {
            return None;
        }
        self.idle_deadline = now + random_delay(&mut self.rng, self.timings.idle);
        Some(range.random_point(&mut self.rng))
    }

    pub(crate) const fn blink_deadline(&self) -> Instant {
        self.blink_deadline
    }

    pub(crate) const fn idle_deadline(&self) -> Instant {
        self.idle_deadline
    }
}

/// Uniform delay in `[min, max)`, or `min` for an empty interval
fn random_delay<R: Rng>(rng: &mut R, interval: Interval) -> Duration {
    let min = interval.min.as_micros();
    let max = interval.max.as_micros();
    if max <= min {
        return interval.min;
    }
    Duration::from_micros(rng.random_range(min..max))
}
