//! Pose -> visual parameter mapping.
//!
//! Everything here is a pure function of the pose, the tilt toggle and the
//! configured rotation range. Binding the values to style properties or
//! shader uniforms is up to the front-end.

use crate::constants::*;
use crate::motion::MotionState;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualParams {
    /// Displayed rotation in degrees; zero while tilt is disabled.
    pub rotate_x: f32,
    pub rotate_y: f32,
    /// Glare position, percent.
    pub pointer_x: f32,
    pub pointer_y: f32,
    /// Glare position as fractions in `[0, 1]`.
    pub from_left: f32,
    pub from_top: f32,
    /// 0 at the center, 1 at a corner.
    pub from_center: f32,
    pub background_x: f32,
    pub background_y: f32,
    /// Tilt magnitude in `[0, 1]`.
    pub intensity: f32,
    pub glare_opacity: f32,
    pub holo_opacity: f32,
    pub sparkle_opacity: f32,
    pub rainbow_angle: f32,
    pub rainbow_pos: f32,
}

#[inline]
pub fn round_to(v: f32, places: i32) -> f32 {
    let scale = 10f32.powi(places);
    (v * scale).round() / scale
}

/// Distance of the glare from the card center, normalized so a corner is 1.
#[inline]
pub fn from_center(from_left: f32, from_top: f32) -> f32 {
    let d = ((from_left - 0.5).powi(2) + (from_top - 0.5).powi(2)).sqrt();
    (d * std::f32::consts::SQRT_2).clamp(0.0, 1.0)
}

/// Radial tilt magnitude normalized to `[0, 1]`.
#[inline]
pub fn tilt_intensity(rot_x: f32, rot_y: f32, max_rotation: f32) -> f32 {
    ((rot_x * rot_x + rot_y * rot_y).sqrt() / max_rotation).clamp(0.0, 1.0)
}

pub fn map_to_visual_params(state: &MotionState, tilt_enabled: bool, max_rotation: f32) -> VisualParams {
    let (rot_x, rot_y) = (state.rot_x(), state.rot_y());
    // derived layers keep following the underlying pose even with tilt off
    let (rotate_x, rotate_y) = if tilt_enabled { (rot_x, rot_y) } else { (0.0, 0.0) };

    let from_left = round_to(state.glare_x() / 100.0, FRACTION_ROUND_PLACES);
    let from_top = round_to(state.glare_y() / 100.0, FRACTION_ROUND_PLACES);

    let yaw = rot_y / max_rotation;
    let pitch = rot_x / max_rotation;
    let intensity = tilt_intensity(rot_x, rot_y, max_rotation);

    VisualParams {
        rotate_x: round_to(rotate_x, ROUND_PLACES),
        rotate_y: round_to(rotate_y, ROUND_PLACES),
        pointer_x: round_to(state.glare_x(), ROUND_PLACES),
        pointer_y: round_to(state.glare_y(), ROUND_PLACES),
        from_left,
        from_top,
        from_center: round_to(from_center(from_left, from_top), FRACTION_ROUND_PLACES),
        background_x: round_to(50.0 + yaw * BACKGROUND_SPAN_PCT, ROUND_PLACES),
        background_y: round_to(50.0 - pitch * BACKGROUND_SPAN_PCT, ROUND_PLACES),
        intensity: round_to(intensity, ROUND_PLACES),
        glare_opacity: round_to(intensity * GLARE_OPACITY_SCALE, ROUND_PLACES),
        holo_opacity: round_to(intensity * HOLO_OPACITY_SCALE, ROUND_PLACES),
        sparkle_opacity: round_to(intensity * SPARKLE_OPACITY_SCALE, ROUND_PLACES),
        rainbow_angle: round_to(RAINBOW_BASE_ANGLE_DEG + yaw * RAINBOW_ANGLE_SPAN_DEG, ROUND_PLACES),
        rainbow_pos: round_to(50.0 + yaw * RAINBOW_POS_SPAN_PCT, ROUND_PLACES),
    }
}
