use crate::color::{wrap_phase, ColorRamp, Rgb};
use crate::constants::*;
use glam::Vec2;

pub const MARKER_RAMP: ColorRamp = ColorRamp::new(&[
    (0.0, MARKER_WARM),
    (0.25, MARKER_SUN),
    (0.5, MARKER_WARM),
    (0.75, MARKER_COOL),
]);

/// Sun/moon marker position (normalised to the surface, y down) and colour.
pub fn orbit(phase: f32) -> (Vec2, Rgb) {
    let angle = (wrap_phase(phase) * 360.0 + ORBIT_ANGLE_OFFSET_DEG).to_radians();
    let pos = ORBIT_CENTER + ORBIT_RADII * Vec2::new(angle.cos(), angle.sin());
    (pos, MARKER_RAMP.sample(phase))
}

/// Squared distance from the centre in ellipse space; 1.0 on the path.
pub fn ellipse_norm(pos: Vec2) -> f32 {
    ((pos - ORBIT_CENTER) / ORBIT_RADII).length_squared()
}
