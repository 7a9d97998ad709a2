use crate::arbiter::{IdleArbiter, InputKind, InteractionMode};
use crate::config::{Config, ConfigError, SmoothingStrategy};
use crate::motion::MotionState;
use crate::normalize::{normalize_orientation, normalize_pointer, CardRect, OrientationSample, PointerSample};
use crate::params::{map_to_visual_params, VisualParams};
use crate::smoother::Smoother;
use std::time::Duration;

/// One card view: turns input samples into per-frame [`VisualParams`].
///
/// Time is supplied by the caller as a monotonic `Duration` (e.g. time since
/// page load). Nothing here blocks or owns a timer; the idle timeout is
/// checked on every input and every [`frame`](HoloEngine::frame).
pub struct HoloEngine {
    config: Config,
    target: MotionState,
    arbiter: IdleArbiter,
    smoother: Smoother,
    rect: Option<CardRect>,
    tilt_enabled: bool,
    params: VisualParams,
}

impl HoloEngine {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = map_to_visual_params(&MotionState::CENTERED, true, config.max_rotation);
        Ok(Self {
            arbiter: IdleArbiter::new(config.idle_timeout),
            smoother: Smoother::new(config.strategy),
            config,
            target: MotionState::CENTERED,
            rect: None,
            tilt_enabled: true,
            params,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> InteractionMode {
        self.arbiter.mode()
    }

    pub fn target(&self) -> &MotionState {
        &self.target
    }

    /// Pose currently on screen.
    pub fn current(&self) -> &MotionState {
        self.smoother.current()
    }

    pub fn tilt_enabled(&self) -> bool {
        self.tilt_enabled
    }

    // ---------------- Card bounds ----------------

    pub fn set_card_rect(&mut self, rect: CardRect) {
        self.rect = Some(rect);
    }

    /// Forget the cached bounds; the next pointer input needs a fresh rect.
    pub fn invalidate_rect(&mut self) {
        self.rect = None;
    }

    pub fn needs_rect(&self) -> bool {
        self.rect.is_none()
    }

    pub fn card_rect(&self) -> Option<&CardRect> {
        self.rect.as_ref()
    }

    // ---------------- Input ----------------

    pub fn handle_pointer_input(&mut self, x: f32, y: f32, now: Duration) {
        self.pointer_like(InputKind::Pointer, PointerSample::new(x, y), now);
    }

    pub fn handle_touch_input(&mut self, x: f32, y: f32, now: Duration) {
        self.pointer_like(InputKind::Touch, PointerSample::new(x, y), now);
    }

    pub fn handle_orientation_input(&mut self, beta: Option<f32>, gamma: Option<f32>, now: Duration) {
        self.expire(now);
        if !self.arbiter.on_input(InputKind::Orientation, now) {
            return;
        }
        let sample = OrientationSample::new(beta, gamma);
        let pose = normalize_orientation(sample, self.config.max_rotation, self.config.gyro_scale);
        self.set_target(pose);
    }

    pub fn handle_pointer_leave(&mut self) {
        self.arbiter.on_leave();
        self.set_target(MotionState::CENTERED);
    }

    pub fn handle_touch_end(&mut self) {
        self.handle_pointer_leave();
    }

    /// Send the target back to the neutral pose. Idempotent.
    pub fn reset_to_center(&mut self) {
        self.set_target(MotionState::CENTERED);
    }

    pub fn set_tilt_enabled(&mut self, enabled: bool) {
        if self.tilt_enabled != enabled {
            log::debug!("[engine] tilt {}", if enabled { "on" } else { "off" });
            self.tilt_enabled = enabled;
            self.smoother.request_update();
        }
    }

    fn pointer_like(&mut self, kind: InputKind, sample: PointerSample, now: Duration) {
        let Some(rect) = self.rect.filter(CardRect::is_laid_out) else {
            log::trace!("[engine] {:?} sample ignored: card not laid out", kind);
            return;
        };
        if !sample.is_finite() {
            log::trace!("[engine] {:?} sample ignored: non-finite {:?}", kind, sample);
            return;
        }
        self.expire(now);
        self.arbiter.on_input(kind, now);
        self.set_target(normalize_pointer(sample, &rect, self.config.max_rotation));
    }

    fn set_target(&mut self, pose: MotionState) {
        let pose = pose.clamped(self.config.max_rotation);
        if pose.is_finite() {
            self.target = pose;
            self.smoother.request_update();
        }
    }

    fn expire(&mut self, now: Duration) {
        if self.arbiter.poll(now) {
            self.set_target(MotionState::CENTERED);
        }
    }

    // ---------------- Frame ----------------

    /// Advance to `now`. Returns fresh parameters when the display changed
    /// (always, in interpolating mode).
    pub fn frame(&mut self, now: Duration) -> Option<VisualParams> {
        self.expire(now);
        let factor = match self.arbiter.mode() {
            InteractionMode::PointerActive => self.config.smoothing,
            _ => self.config.spring_back,
        };
        let shown = self.smoother.advance(&self.target, factor, now)?;
        self.params = map_to_visual_params(&shown, self.tilt_enabled, self.config.max_rotation);
        Some(self.params)
    }

    /// Parameters for the pose last produced by [`frame`](HoloEngine::frame).
    pub fn visual_params(&self) -> VisualParams {
        self.params
    }

    pub fn strategy(&self) -> SmoothingStrategy {
        self.smoother.strategy()
    }
}

/// Engine clock from a host timestamp in milliseconds (e.g. `performance.now()`).
/// Negative or NaN maps to zero; values past `Duration::MAX` saturate.
pub fn clock_from_millis(now_ms: f64) -> Duration {
    if now_ms.is_nan() || now_ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(now_ms / 1000.0).unwrap_or(Duration::MAX)
}
