use crate::config::EyesConfig;
use crate::easing::Eased;
use crate::mood::EyelidCutoffs;

/// Height of a fully closed eye
///
/// Never zero, so a closed eye is still a valid rectangle.
pub const CLOSED_HEIGHT: f32 = 1.0;

/// Height at which a blinking eye is considered shut and starts reopening
pub const REOPEN_THRESHOLD: f32 = 1.1;

/// Which of the two eyes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Geometry of a single eye
///
/// Every field eases towards its own target. Targets are set by the
/// renderer while applying intents and behaviors; current values are only
/// advanced by the per-frame update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eye {
    pub x: Eased,
    pub y: Eased,
    pub w: Eased,
    pub h: Eased,
    /// Upper eyelid cutoff at the left edge
    pub eyelid_left: Eased,
    /// Upper eyelid cutoff at the right edge
    pub eyelid_right: Eased,
}

impl Eye {
    /// Create a closed eye with its top-left corner at `(x, y)`
    pub(crate) const fn closed_at(x: f32, y: f32, config: &EyesConfig) -> Self {
        Self {
            x: Eased::new(x),
            y: Eased::new(y),
            w: Eased::new(config.eye_width),
            h: Eased::new(CLOSED_HEIGHT),
            eyelid_left: Eased::new(y),
            eyelid_right: Eased::new(y),
        }
    }

    /// Check if the eye has closed far enough to count as shut
    pub fn is_shut(&self) -> bool {
        self.h.current() <= REOPEN_THRESHOLD
    }

    pub(crate) fn set_position_target(&mut self, x: f32, y: f32) {
        self.x.set(x);
        self.y.set(y);
    }

    pub(crate) fn ease_size(&mut self) {
        self.w.tick();
        self.h.tick();
    }

    /// Keep a resizing eye centered on its default box
    ///
    /// Applied after the size has eased and before the position does, so a
    /// blink closes towards the middle of the eye instead of its top edge.
    pub(crate) fn recenter(&mut self, config: &EyesConfig) {
        self.x.nudge((config.eye_width - self.w.current()) / 2.0);
        self.y.nudge((config.eye_height - self.h.current()) / 2.0);
    }

    pub(crate) fn ease_position(&mut self) {
        self.x.tick();
        self.y.tick();
    }

    pub(crate) fn set_eyelid_targets(&mut self, cutoffs: EyelidCutoffs) {
        self.eyelid_left.set(cutoffs.left);
        self.eyelid_right.set(cutoffs.right);
    }

    pub(crate) fn ease_eyelids(&mut self) {
        self.eyelid_left.tick();
        self.eyelid_right.tick();
    }
}
