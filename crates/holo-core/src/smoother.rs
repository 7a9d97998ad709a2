use crate::config::SmoothingStrategy;
use crate::constants::{MAX_FRAME_DT_SEC, REFERENCE_FPS};
use crate::motion::MotionState;
use std::time::Duration;

/// Blend fraction for `dt_sec` given a factor defined per reference frame.
///
/// Equals `factor` when `dt_sec` is one reference frame, and composes so that
/// two half-length frames blend the same amount as one full frame.
#[inline]
pub fn frame_alpha(factor: f32, dt_sec: f32) -> f32 {
    let frames = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC) * REFERENCE_FPS;
    1.0 - (1.0 - factor.clamp(0.0, 1.0)).powf(frames)
}

/// Carries the displayed pose from frame to frame.
#[derive(Clone, Debug)]
pub struct Smoother {
    strategy: SmoothingStrategy,
    current: MotionState,
    pending: bool,
    last_frame: Option<Duration>,
}

impl Smoother {
    pub fn new(strategy: SmoothingStrategy) -> Self {
        Self {
            strategy,
            current: MotionState::CENTERED,
            // first frame always paints the neutral pose
            pending: true,
            last_frame: None,
        }
    }

    pub fn strategy(&self) -> SmoothingStrategy {
        self.strategy
    }

    pub fn current(&self) -> &MotionState {
        &self.current
    }

    /// Schedule a repaint. Calls between two frames coalesce into one update
    /// that carries whatever the target is when the frame runs.
    pub fn request_update(&mut self) {
        self.pending = true;
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Advance one frame. `factor` is the per-reference-frame blend to use in
    /// interpolating mode. Returns the pose to display, or `None` when nothing
    /// changed (direct mode only).
    pub fn advance(&mut self, target: &MotionState, factor: f32, now: Duration) -> Option<MotionState> {
        let dt_sec = match self.last_frame {
            Some(prev) => now.saturating_sub(prev).as_secs_f32(),
            None => 1.0 / REFERENCE_FPS,
        };
        self.last_frame = Some(now);
        match self.strategy {
            SmoothingStrategy::Direct => {
                if !std::mem::take(&mut self.pending) {
                    return None;
                }
                self.current = *target;
            }
            SmoothingStrategy::Interpolate => {
                self.pending = false;
                self.current = self.current.approach(target, frame_alpha(factor, dt_sec));
            }
        }
        Some(self.current)
    }
}
