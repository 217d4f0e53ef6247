//! Control surface for the eyes
//!
//! Callers never touch the renderer directly. They send intents through an
//! [`EyesRemote`], which merges them into a single record of pending
//! targets. The renderer takes that record at the start of each frame. The
//! record is guarded by a critical section, so remotes can live in other
//! tasks, threads or interrupt handlers.
//!
//! Merging keeps only the newest value per target: any number of calls
//! between two frames fit, and the last one always wins.

use core::cell::Cell;

use critical_section::Mutex;

use crate::mood::Mood;
use crate::position::Position;

/// A change to the eyes' target state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyesIntent {
    /// Open both eyes and start blinking
    Open,
    /// Close both eyes and look to the center
    Close,
    SetMood(Mood),
    /// Enable or disable idle wandering
    SetIdle(bool),
    SetPosition(Position),
}

/// Targets changed since the last frame
///
/// `None` leaves the renderer's current value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingTargets {
    pub open: Option<bool>,
    pub idle: Option<bool>,
    pub mood: Option<Mood>,
    pub position: Option<Position>,
}

impl PendingTargets {
    /// Check if any target needs to be applied
    pub const fn is_empty(&self) -> bool {
        self.open.is_none() && self.idle.is_none() && self.mood.is_none() && self.position.is_none()
    }

    /// Fold an intent into the record
    ///
    /// Closing and disabling idle also recenter the gaze, so a later
    /// position overrides them and an earlier one does not.
    pub fn merge(&mut self, intent: EyesIntent) {
        match intent {
            EyesIntent::Open => {
                self.open = Some(true);
            }
            EyesIntent::Close => {
                self.open = Some(false);
                self.position = Some(Position::Center);
            }
            EyesIntent::SetMood(mood) => {
                self.mood = Some(mood);
            }
            EyesIntent::SetIdle(idle) => {
                self.idle = Some(idle);
                if !idle {
                    self.position = Some(Position::Center);
                }
            }
            EyesIntent::SetPosition(position) => {
                self.position = Some(position);
            }
        }
    }
}

/// Pending targets shared by remotes and the renderer
///
/// `const`-constructible so it can be placed in a `static`.
pub struct ControlChannel {
    pending: Mutex<Cell<PendingTargets>>,
}

impl ControlChannel {
    /// Create a new channel with nothing pending.
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(PendingTargets {
                open: None,
                idle: None,
                mood: None,
                position: None,
            })),
        }
    }

    /// Get a remote for this channel.
    ///
    /// Multiple remotes can coexist; their intents merge in call order.
    pub const fn remote(&self) -> EyesRemote<'_> {
        EyesRemote { channel: self }
    }

    /// Get the receiving end for the renderer.
    pub const fn receiver(&self) -> IntentReceiver<'_> {
        IntentReceiver { channel: self }
    }

    fn merge(&self, intent: EyesIntent) {
        critical_section::with(|cs| {
            let cell = self.pending.borrow(cs);
            let mut pending = cell.get();
            pending.merge(intent);
            cell.set(pending);
        });
    }

    fn take(&self) -> PendingTargets {
        critical_section::with(|cs| self.pending.borrow(cs).take())
    }

    /// Check if anything changed since the last frame
    pub fn has_pending(&self) -> bool {
        critical_section::with(|cs| !self.pending.borrow(cs).get().is_empty())
    }
}

impl Default for ControlChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-facing handle to the eyes
///
/// Every method only records a target and returns immediately. The effect
/// becomes visible from the next rendered frame on.
#[derive(Clone, Copy)]
pub struct EyesRemote<'a> {
    channel: &'a ControlChannel,
}

impl EyesRemote<'_> {
    /// Record a raw intent
    pub fn send(&self, intent: EyesIntent) {
        self.channel.merge(intent);
    }

    pub fn open(&self) {
        self.send(EyesIntent::Open);
    }

    pub fn close(&self) {
        self.send(EyesIntent::Close);
    }

    pub fn set_open(&self, open: bool) {
        if open { self.open() } else { self.close() }
    }

    pub fn set_mood(&self, mood: Mood) {
        self.send(EyesIntent::SetMood(mood));
    }

    /// Toggle idle wandering; turning it off recenters the gaze
    pub fn set_idle(&self, idle: bool) {
        self.send(EyesIntent::SetIdle(idle));
    }

    pub fn set_position(&self, position: Position) {
        self.send(EyesIntent::SetPosition(position));
    }
}

/// Receiving end of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a> {
    channel: &'a ControlChannel,
}

impl IntentReceiver<'_> {
    /// Take everything recorded since the last call, leaving it empty
    pub fn take_pending(&self) -> PendingTargets {
        self.channel.take()
    }
}
