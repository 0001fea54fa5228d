use crate::constants::{TILT_DEG_PER_UNIT, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use glam::Vec2;

/// Inline transform that removes any tilt.
pub const TILT_RESET: &str = "";

/// Cursor offset from the card center, each axis in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltOffset(pub Vec2);

impl TiltOffset {
    /// Normalize a client-space cursor position against the card's bounding box.
    /// Returns `None` when the box has no area.
    #[inline]
    pub fn from_pointer(
        client_x: f32,
        client_y: f32,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    ) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let px = (client_x - left) / width - 0.5;
        let py = (client_y - top) / height - 0.5;
        Some(Self(Vec2::new(px, py)))
    }

    /// (rotateY, rotateX) in degrees. Moving right turns the card right,
    /// moving down tips its top edge away.
    #[inline]
    pub fn angles_deg(self) -> (f32, f32) {
        (self.0.x * TILT_DEG_PER_UNIT, -self.0.y * TILT_DEG_PER_UNIT)
    }

    pub fn transform(self) -> String {
        let (ry, rx) = self.angles_deg();
        format!(
            "perspective({}px) rotateY({:.3}deg) rotateX({:.3}deg) translateY(-{}px)",
            TILT_PERSPECTIVE_PX, ry, rx, TILT_LIFT_PX
        )
    }
}
