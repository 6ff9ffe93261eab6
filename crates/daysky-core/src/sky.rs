use crate::color::{Rgb, Rgba};
use crate::{orbit, palette};
use glam::Vec2;

/// Everything the backdrop needs for one frame. Recomputed every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleState {
    pub phase: f32,
    pub inner: Rgb,
    pub outer: Rgb,
    pub orbit: Vec2,
    pub orbit_color: Rgb,
    pub cloud_tint: Rgba,
    pub night: f32,
    pub night_glow: f32,
}

impl CycleState {
    pub fn at(phase: f32, tint_alpha: f32) -> Self {
        let (inner, outer) = palette::palette(phase);
        let (orbit, orbit_color) = orbit::orbit(phase);
        Self {
            phase,
            inner,
            outer,
            orbit,
            orbit_color,
            cloud_tint: Rgba {
                rgb: palette::cloud_tint(phase),
                alpha: tint_alpha,
            },
            night: palette::night(phase),
            night_glow: palette::night_glow(phase),
        }
    }
}
