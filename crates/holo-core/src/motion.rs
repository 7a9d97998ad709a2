//! Rotation/glare pose of the card.
//!
//! Axis convention (shared by pointer and orientation input, and matching CSS
//! `rotateX`/`rotateY`): positive `rotation.x` tilts the top edge away from
//! the viewer, positive `rotation.y` tilts the right edge away. The glare
//! always sits on the side that dips away, so the card appears pressed
//! under the pointer.

use crate::constants::GLARE_CENTER_PCT;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    /// `x` is pitch (rotation about the horizontal axis), `y` is yaw; degrees.
    pub rotation: Vec2,
    /// Glare position in percent of the card, `[0, 100]` on both axes.
    pub glare: Vec2,
}

impl Default for MotionState {
    fn default() -> Self {
        Self::CENTERED
    }
}

impl MotionState {
    pub const CENTERED: Self = Self {
        rotation: Vec2::ZERO,
        glare: Vec2::splat(GLARE_CENTER_PCT),
    };

    pub fn new(rot_x: f32, rot_y: f32, glare_x: f32, glare_y: f32) -> Self {
        Self {
            rotation: Vec2::new(rot_x, rot_y),
            glare: Vec2::new(glare_x, glare_y),
        }
    }

    #[inline]
    pub fn rot_x(&self) -> f32 {
        self.rotation.x
    }

    #[inline]
    pub fn rot_y(&self) -> f32 {
        self.rotation.y
    }

    #[inline]
    pub fn glare_x(&self) -> f32 {
        self.glare.x
    }

    #[inline]
    pub fn glare_y(&self) -> f32 {
        self.glare.y
    }

    /// Clamp rotation to `[-max_rotation, max_rotation]` and glare to `[0, 100]`.
    pub fn clamped(self, max_rotation: f32) -> Self {
        Self {
            rotation: self
                .rotation
                .clamp(Vec2::splat(-max_rotation), Vec2::splat(max_rotation)),
            glare: self.glare.clamp(Vec2::ZERO, Vec2::splat(100.0)),
        }
    }

    /// Move `alpha` of the way toward `target`.
    pub fn approach(self, target: &Self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self {
            rotation: self.rotation.lerp(target.rotation, alpha),
            glare: self.glare.lerp(target.glare, alpha),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.glare.is_finite()
    }

    pub fn is_centered(&self) -> bool {
        *self == Self::CENTERED
    }
}
