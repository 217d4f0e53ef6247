use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::behavior::Behaviors;
use crate::config::EyesConfig;
use crate::control::{IntentReceiver, PendingTargets};
use crate::easing::Eased;
use crate::eye::{CLOSED_HEIGHT, Eye, Side};
use crate::frame::Frame;
use crate::mood::Mood;
use crate::position::{LegalRange, Position};

/// Discrete target state set through intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyesState {
    pub is_open: bool,
    pub is_idle: bool,
    pub mood: Mood,
}

/// Eyes renderer - owns all animation state
///
/// Each call to [`Renderer::render`] is one frame:
/// 1. apply pending intents (targets only)
/// 2. ease size, recenter, ease position
/// 3. run blink and idle behaviors
/// 4. derive and ease eyelids from the mood
/// 5. compose the draw primitives
pub struct Renderer<'a> {
    // External dependencies and configuration
    intents: IntentReceiver<'a>,
    config: EyesConfig,
    range: LegalRange,

    // Internal state
    state: EyesState,
    left: Eye,
    right: Eye,
    happy_eyelid: Eased,
    behaviors: Behaviors,
    frame: Frame,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with both eyes closed in the center
    ///
    /// `seed` feeds the random generator behind blink and idle timing.
    pub fn new(intents: IntentReceiver<'a>, config: &EyesConfig, seed: u64) -> Self {
        let x = (config.screen_width - (config.eye_width * 2.0 + config.eye_gap)) / 2.0;
        let y = (config.screen_height - config.eye_height) / 2.0;
        let left = Eye::closed_at(x, y, config);
        let right = Eye::closed_at(x + config.pair_offset(), y, config);
        let happy_eyelid = Eased::new(1.0);

        Self {
            intents,
            config: *config,
            range: LegalRange::from_config(config),
            state: EyesState {
                is_open: false,
                is_idle: false,
                mood: Mood::Neutral,
            },
            left,
            right,
            happy_eyelid,
            behaviors: Behaviors::new(config.timings, seed),
            frame: Frame::compose(&left, &right, happy_eyelid.current(), config.eye_radius),
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this once per frame period.
    pub fn render(&mut self, now: Instant) -> &Frame {
        self.process_intents();
        self.update_geometry();
        self.update_behaviors(now);
        self.update_eyelids();

        self.frame = Frame::compose(
            &self.left,
            &self.right,
            self.happy_eyelid.current(),
            self.config.eye_radius,
        );
        &self.frame
    }

    pub const fn state(&self) -> EyesState {
        self.state
    }

    pub const fn left_eye(&self) -> &Eye {
        &self.left
    }

    pub const fn right_eye(&self) -> &Eye {
        &self.right
    }

    /// Current divisor of the happy lower eyelid
    pub const fn happy_eyelid(&self) -> &Eased {
        &self.happy_eyelid
    }

    pub const fn legal_range(&self) -> LegalRange {
        self.range
    }

    pub const fn config(&self) -> &EyesConfig {
        &self.config
    }

    /// Last composed frame
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Time of the next scheduled blink
    pub const fn next_blink(&self) -> Instant {
        self.behaviors.blink_deadline()
    }

    /// Time of the next idle gaze change
    pub const fn next_idle_move(&self) -> Instant {
        self.behaviors.idle_deadline()
    }

    /// Apply targets recorded since the last frame (non-blocking)
    fn process_intents(&mut self) {
        let pending = self.intents.take_pending();
        if pending.is_empty() {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.process_intents] applying {:?}", pending);
        self.apply_pending(pending);
    }

    /// Close and idle-off already carry their CENTER gaze in `position`
    fn apply_pending(&mut self, pending: PendingTargets) {
        if let Some(open) = pending.open {
            let height = if open {
                self.config.eye_height
            } else {
                CLOSED_HEIGHT
            };
            self.set_height_targets(height);
            self.state.is_open = open;
        }
        if let Some(idle) = pending.idle {
            self.state.is_idle = idle;
        }
        if let Some(mood) = pending.mood {
            self.state.mood = mood;
        }
        if let Some(position) = pending.position {
            self.set_position(position);
        }
    }

    fn set_position(&mut self, position: Position) {
        let (x, y) = position.resolve(self.range);
        self.set_gaze_target(x, y);
    }

    /// Retarget the left eye; the right eye keeps its fixed offset
    fn set_gaze_target(&mut self, x: f32, y: f32) {
        self.left.set_position_target(x, y);
        self.right
            .set_position_target(x + self.config.pair_offset(), y);
    }

    fn set_height_targets(&mut self, height: f32) {
        self.left.h.set(height);
        self.right.h.set(height);
    }

    /// Advance size and position of both eyes
    ///
    /// Order matters: sizes are recentered before positions ease, and the
    /// right eye chases a target derived from this frame's left target.
    fn update_geometry(&mut self) {
        self.left.ease_size();
        self.right.ease_size();

        self.left.recenter(&self.config);
        self.right.recenter(&self.config);

        self.left.ease_position();

        self.right.set_position_target(
            self.left.x.target() + self.config.pair_offset(),
            self.left.y.target(),
        );
        self.right.ease_position();
    }

    /// Reopen after a blink, blink on schedule, wander while idle
    fn update_behaviors(&mut self, now: Instant) {
        if !self.state.is_open {
            return;
        }

        let full_height = self.config.eye_height;
        if self.left.is_shut() {
            self.left.h.set(full_height);
        }
        if self.right.is_shut() {
            self.right.h.set(full_height);
        }

        if self.behaviors.blink_due(now) {
            #[cfg(feature = "esp32-log")]
            println!("[Renderer.update_behaviors] blink");
            self.set_height_targets(CLOSED_HEIGHT);
        }

        if self.state.is_idle {
            if let Some((x, y)) = self.behaviors.idle_target(now, self.range) {
                #[cfg(feature = "esp32-log")]
                println!("[Renderer.update_behaviors] idle gaze to ({}, {})", x, y);
                self.set_gaze_target(x, y);
            }
        }
    }

    /// Retarget eyelids from the mood and the visible eye shape, then ease
    fn update_eyelids(&mut self) {
        let mood = self.state.mood;
        for (eye, side) in [(&mut self.left, Side::Left), (&mut self.right, Side::Right)] {
            let targets = mood.eyelid_targets(side, eye.y.current(), eye.h.current());
            eye.set_eyelid_targets(targets);
        }

        self.happy_eyelid
            .set(mood.happy_eyelid_target(self.config.happy_eyelid_thickness));
        self.happy_eyelid.tick();

        self.left.ease_eyelids();
        self.right.ease_eyelids();
    }
}
