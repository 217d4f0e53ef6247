#![no_std]

mod behavior;
pub mod canvas;
pub mod config;
pub mod control;
pub mod easing;
pub mod eye;
pub mod frame;
pub mod frame_scheduler;
pub mod mood;
pub mod position;
pub mod renderer;

pub use canvas::Canvas;
pub use config::{BehaviorTimings, EyesConfig, Interval};
pub use control::{ControlChannel, EyesIntent, EyesRemote, IntentReceiver, PendingTargets};
pub use easing::{Eased, ease};
pub use eye::{Eye, Side};
pub use frame::{BinaryColor, Frame, Point, Primitive, Quad, Rect, RoundedRect};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use mood::{EyelidCutoffs, Mood};
pub use position::{LegalRange, Position};
pub use renderer::{EyesState, Renderer};

pub use embassy_time::{Duration, Instant};

/// Abstract display trait
///
/// Implement this trait to support different screens.
/// The frame scheduler is generic over this trait.
pub trait Display {
    /// Error reported by the device; it stops the render loop
    type Error;

    /// Draw a complete frame and show it at once
    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
