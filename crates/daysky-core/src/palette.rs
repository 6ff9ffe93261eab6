use crate::color::{wrap_phase, ColorRamp, Rgb};
use crate::constants::*;

/// Sky anchors: dawn -> noon -> sunset -> night, back to dawn at phase 1.
pub const SKY_RAMP: ColorRamp =
    ColorRamp::new(&[(0.0, DAWN), (0.25, NOON), (0.5, SUNSET), (0.75, NIGHT)]);

pub const CLOUD_RAMP: ColorRamp = ColorRamp::new(&[
    (0.0, CLOUD_WARM),
    (0.25, CLOUD_WHITE),
    (0.55, CLOUD_GOLDEN),
    (0.8, CLOUD_BLUE),
]);

/// Backdrop gradient stops `(inner, outer)` for a phase.
///
/// The outer stop leans toward the colour of the next segment so the
/// radial gradient keeps some contrast, while staying continuous at every
/// segment boundary.
pub fn palette(phase: f32) -> (Rgb, Rgb) {
    let inner = SKY_RAMP.sample(phase);
    let ahead = SKY_RAMP.sample(wrap_phase(phase + RIM_LEAD));
    (inner, inner.mix(ahead, RIM_CONTRAST))
}

pub fn cloud_tint(phase: f32) -> Rgb {
    CLOUD_RAMP.sample(phase)
}

/// How "night" the sky is, 0..1: rises through dusk, falls just before dawn.
pub fn night(phase: f32) -> f32 {
    let p = wrap_phase(phase);
    let [rise0, rise1] = NIGHT_RISE;
    let [fall0, fall1] = NIGHT_FALL;
    if p < rise0 {
        0.0
    } else if p < rise1 {
        (p - rise0) / (rise1 - rise0)
    } else if p < fall0 {
        1.0
    } else {
        ((fall1 - p) / (fall1 - fall0)).clamp(0.0, 1.0)
    }
}

#[inline]
pub fn night_glow(phase: f32) -> f32 {
    NIGHT_GLOW_MAX * night(phase)
}
