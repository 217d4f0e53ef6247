//! Exponential easing
//!
//! Every animated value moves halfway to its target on each frame. There is
//! no duration and no end state: a value keeps chasing its target, and the
//! target may be changed at any time.

/// Share of the remaining distance covered per frame
pub const EASING_FACTOR: f32 = 0.5;

/// Move `current` halfway towards `target`
#[inline]
pub fn ease(current: f32, target: f32) -> f32 {
    (current + target) * EASING_FACTOR
}

/// A value that eases towards a target once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eased {
    current: f32,
    target: f32,
}

impl Eased {
    /// Create a value already resting at `initial`
    pub const fn new(initial: f32) -> Self {
        Self {
            current: initial,
            target: initial,
        }
    }

    /// Displayed value
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Value being approached
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Retarget without touching the displayed value
    pub fn set(&mut self, target: f32) {
        self.target = target;
    }

    /// Shift the displayed value without retargeting
    pub(crate) fn nudge(&mut self, delta: f32) {
        self.current += delta;
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.current = ease(self.current, self.target);
    }

    /// Check if the displayed value is within `epsilon` of the target
    pub fn is_settled(&self, epsilon: f32) -> bool {
        let distance = self.current - self.target;
        distance <= epsilon && distance >= -epsilon
    }
}
