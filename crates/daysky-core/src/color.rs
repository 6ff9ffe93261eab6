//! Linear color helpers and a wrapping keyframe ramp.
//!
//! Channels are kept as `f32` in `[0, 1]` so interpolation never rounds; the
//! web surface rounds to bytes only when it formats CSS.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgb(pub Vec3);

impl Rgb {
    pub fn from_u8([r, g, b]: [u8; 3]) -> Self {
        Self(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
    }

    /// Channels rounded to bytes.
    pub fn to_u8(self) -> [u8; 3] {
        let c = (self.0.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8]
    }

    #[inline]
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        Rgb(self.0.lerp(other.0, t))
    }

    /// Largest per-channel difference.
    pub fn max_delta(self, other: Rgb) -> f32 {
        (self.0 - other.0).abs().max_element()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

/// Piecewise-linear color keyframes over a phase in `[0, 1)`.
///
/// The last stop blends back into the first at phase 1, so a ramp is always
/// continuous across the wrap point.
#[derive(Clone, Copy, Debug)]
pub struct ColorRamp {
    stops: &'static [(f32, [u8; 3])],
}

impl ColorRamp {
    /// Stops must be sorted by phase, start at 0.0 and stay below 1.0.
    pub const fn new(stops: &'static [(f32, [u8; 3])]) -> Self {
        Self { stops }
    }

    pub fn sample(&self, phase: f32) -> Rgb {
        let Some(&(_, first)) = self.stops.first() else {
            return Rgb::default();
        };
        let p = wrap_phase(phase);
        let n = self.stops.len();
        let k = self
            .stops
            .iter()
            .rposition(|&(at, _)| at <= p)
            .unwrap_or(0);
        let (start, a) = self.stops[k];
        let (end, b) = if k + 1 < n {
            self.stops[k + 1]
        } else {
            (1.0, first)
        };
        let span = end - start;
        let t = if span > 0.0 {
            ((p - start) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Rgb::from_u8(a).mix(Rgb::from_u8(b), t)
    }
}

/// Wraps any finite value into `[0, 1)`; non-finite input maps to 0.
#[inline]
pub fn wrap_phase(p: f32) -> f32 {
    if !p.is_finite() {
        return 0.0;
    }
    let w = p.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}
