//! Scripted demo loop
//!
//! Cycles through moods and gaze positions the way the firmware demo does.

use myrtio_eyes::{EyesRemote, Mood, Position};

#[derive(Debug, Clone, Copy)]
enum DemoStep {
    Mood(Mood),
    Position(Position),
}

/// Steps and how long each one is held, in milliseconds
const DEMO_STEPS: [(DemoStep, u64); 8] = [
    (DemoStep::Mood(Mood::Neutral), 5_000),
    (DemoStep::Mood(Mood::Angry), 3_000),
    (DemoStep::Mood(Mood::Sad), 3_000),
    (DemoStep::Mood(Mood::Tired), 3_000),
    (DemoStep::Mood(Mood::Happy), 3_000),
    (DemoStep::Position(Position::TopLeft), 3_000),
    (DemoStep::Position(Position::BottomRight), 3_000),
    (DemoStep::Position(Position::Center), 3_000),
];

pub struct DemoSequence {
    /// Index of the next step to apply
    index: usize,
    /// Synthetic time at which the next step is due
    next_step_ms: u64,
}

impl DemoSequence {
    /// Start the demo at `t_ms`; the first step fires on the next update
    pub fn start(remote: &EyesRemote<'_>, t_ms: u64) -> Self {
        remote.open();
        Self {
            index: 0,
            next_step_ms: t_ms,
        }
    }

    /// Apply every step that became due by `t_ms`
    pub fn update(&mut self, remote: &EyesRemote<'_>, t_ms: u64) {
        while t_ms >= self.next_step_ms {
            let (step, hold_ms) = DEMO_STEPS[self.index];
            match step {
                DemoStep::Mood(mood) => remote.set_mood(mood),
                DemoStep::Position(position) => remote.set_position(position),
            }
            self.index = (self.index + 1) % DEMO_STEPS.len();
            self.next_step_ms += hold_ms;
        }
    }

    /// Name of the step currently shown
    pub fn current_label(&self) -> &'static str {
        let current = (self.index + DEMO_STEPS.len() - 1) % DEMO_STEPS.len();
        match DEMO_STEPS[current].0 {
            DemoStep::Mood(mood) => mood.as_str(),
            DemoStep::Position(position) => position.as_str(),
        }
    }
}
