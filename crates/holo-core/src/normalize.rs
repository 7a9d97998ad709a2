use crate::constants::{GLARE_CENTER_PCT, GYRO_BETA_REST_DEG, GYRO_GLARE_SPAN_PCT};
use crate::motion::MotionState;
use glam::Vec2;

/// Raw client coordinates of a pointer or touch event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Device tilt in degrees. Absent fields read as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    pub beta: Option<f32>,
    pub gamma: Option<f32>,
}

impl OrientationSample {
    pub fn new(beta: Option<f32>, gamma: Option<f32>) -> Self {
        Self { beta, gamma }
    }

    #[inline]
    pub fn beta_or_zero(&self) -> f32 {
        finite_or_zero(self.beta)
    }

    #[inline]
    pub fn gamma_or_zero(&self) -> f32 {
        finite_or_zero(self.gamma)
    }
}

#[inline]
fn finite_or_zero(v: Option<f32>) -> f32 {
    v.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Screen bounding box of the card, in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CardRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// False until the card has a positive, finite size.
    pub fn is_laid_out(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() * 0.5
    }
}

/// Map a pointer position over `rect` to a pose.
///
/// `rect` must be laid out (see [`CardRect::is_laid_out`]); the result is
/// meaningless otherwise.
pub fn normalize_pointer(sample: PointerSample, rect: &CardRect, max_rotation: f32) -> MotionState {
    let p = Vec2::new(sample.x, sample.y);
    let half = rect.size() * 0.5;
    let norm = ((p - rect.center()) / half).clamp(Vec2::NEG_ONE, Vec2::ONE);
    let glare = ((p - rect.origin()) / rect.size() * 100.0).clamp(Vec2::ZERO, Vec2::splat(100.0));
    MotionState {
        // horizontal motion yaws, vertical motion pitches; the card dips under the pointer
        rotation: Vec2::new(-norm.y, norm.x) * max_rotation,
        glare,
    }
}

/// Map device orientation to a pose.
///
/// The card follows the device: raising the device's top edge toward the
/// holder (beta above the resting angle) brings the card's top edge toward
/// the viewer, and the glare slides to the bottom edge, exactly as a pointer
/// below center would.
pub fn normalize_orientation(
    sample: OrientationSample,
    max_rotation: f32,
    gyro_scale: f32,
) -> MotionState {
    let rot_y = (sample.gamma_or_zero() * gyro_scale).clamp(-max_rotation, max_rotation);
    let rot_x =
        (-(sample.beta_or_zero() - GYRO_BETA_REST_DEG) * gyro_scale).clamp(-max_rotation, max_rotation);
    let glare_x = GLARE_CENTER_PCT + (rot_y / max_rotation) * GYRO_GLARE_SPAN_PCT;
    let glare_y = GLARE_CENTER_PCT - (rot_x / max_rotation) * GYRO_GLARE_SPAN_PCT;
    MotionState::new(rot_x, rot_y, glare_x, glare_y)
}
