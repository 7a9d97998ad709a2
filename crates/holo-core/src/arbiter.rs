//! Input-recency state machine.
//!
//! ```text
//! Idle          --pointer/touch-->        PointerActive
//! Idle          --orientation-->          GyroActive
//! GyroActive    --pointer/touch-->        PointerActive   (preemption)
//! PointerActive --leave-->                Idle            (immediate)
//! PointerActive --idle timeout elapsed--> Idle
//! GyroActive    --idle timeout elapsed--> Idle
//! ```
//!
//! The idle timer is a deadline rather than a host timer: every accepted
//! input pushes it out to `now + timeout` (debounce), and [`IdleArbiter::poll`]
//! reports expiry once the clock passes it.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Idle,
    PointerActive,
    GyroActive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Pointer,
    Touch,
    Orientation,
}

impl InputKind {
    #[inline]
    pub fn is_pointer_like(self) -> bool {
        matches!(self, InputKind::Pointer | InputKind::Touch)
    }
}

#[derive(Clone, Debug)]
pub struct IdleArbiter {
    mode: InteractionMode,
    timeout: Duration,
    deadline: Option<Duration>,
}

impl IdleArbiter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            mode: InteractionMode::Idle,
            timeout,
            deadline: None,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    #[inline]
    pub fn pointer_active(&self) -> bool {
        self.mode == InteractionMode::PointerActive
    }

    /// Record an input at `now`. Returns false when the sample must be
    /// dropped (orientation while pointer/touch is active).
    pub fn on_input(&mut self, kind: InputKind, now: Duration) -> bool {
        let next = if kind.is_pointer_like() {
            InteractionMode::PointerActive
        } else if self.pointer_active() {
            log::trace!("[arbiter] orientation sample dropped while pointer active");
            return false;
        } else {
            InteractionMode::GyroActive
        };
        self.transition(next);
        self.deadline = Some(now.saturating_add(self.timeout));
        true
    }

    /// Pointer left the card or the touch ended.
    pub fn on_leave(&mut self) {
        self.transition(InteractionMode::Idle);
        self.deadline = None;
    }

    /// Returns true exactly once when the pending idle deadline has passed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                log::debug!("[arbiter] idle timeout in {:?}", self.mode);
                self.deadline = None;
                self.transition(InteractionMode::Idle);
                true
            }
            _ => false,
        }
    }

    fn transition(&mut self, next: InteractionMode) {
        if self.mode != next {
            log::debug!("[arbiter] {:?} -> {:?}", self.mode, next);
            self.mode = next;
        }
    }
}
