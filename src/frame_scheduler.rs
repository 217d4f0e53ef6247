//! Frame scheduling and timing utilities.
//!
//! Provides frame pacing for the renderer. [`FrameScheduler::tick`] is
//! portable and leaves the waiting to the caller; [`FrameScheduler::run`]
//! waits with an `embassy-time` timer and needs a time driver.

use core::convert::Infallible;

use embassy_time::{Duration, Instant, Timer};

use crate::{Display, Renderer};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives a renderer into a display at a fixed frame period.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, display);
///
/// loop {
///     let result = scheduler.tick(Instant::now())?;
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler<'a, D: Display> {
    display: D,
    renderer: Renderer<'a>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, D: Display> FrameScheduler<'a, D> {
    /// Create a new frame scheduler.
    ///
    /// Uses the frame duration from the renderer's configuration.
    pub fn new(renderer: Renderer<'a>, display: D) -> Self {
        let frame_duration = renderer.config().frame_duration;
        Self {
            display,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame
    /// 3. Presents it on the display
    /// 4. Returns the deadline for the next frame
    ///
    /// A display error is returned as is and the frame is not retried.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, D::Error> {
        // If we've fallen more than two frames behind, skip the backlog
        let max_drift = self.frame_duration + self.frame_duration;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let frame = self.renderer.render(now);
        self.display.present(frame)?;

        self.next_frame += self.frame_duration;
        let sleep_duration = self.next_frame.saturating_duration_since(now);

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Run the render loop until the display fails.
    pub async fn run(mut self) -> Result<Infallible, D::Error> {
        loop {
            let result = self.tick(Instant::now())?;
            Timer::at(result.next_deadline).await;
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a> {
        &self.renderer
    }

    /// Get a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get a mutable reference to the display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
