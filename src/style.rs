// CSS value formatting for the DOM surface. Kept free of web-sys so the host
// tests can include it directly.

use daysky_core::{Rgb, Rgba};
use glam::Vec2;

#[inline]
pub fn rgb(c: Rgb) -> String {
    let [r, g, b] = c.to_u8();
    format!("rgb({},{},{})", r, g, b)
}

#[inline]
pub fn rgba(c: Rgba) -> String {
    let [r, g, b] = c.rgb.to_u8();
    format!("rgba({},{},{},{:.3})", r, g, b, c.alpha.clamp(0.0, 1.0))
}

/// Two-stop radial backdrop.
pub fn radial_gradient(inner: Rgb, outer: Rgb) -> String {
    format!(
        "radial-gradient(100% 120% at 50% 50%, {} 0%, {} 100%)",
        rgb(inner),
        rgb(outer)
    )
}

/// Trail dot transform in viewport pixels.
pub fn translate_px_scale(pos: Vec2, scale: f32) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
        pos.x, pos.y, scale
    )
}

/// Particle drift offset in viewport units.
pub fn translate_viewport(dx_vw: f32, dy_vh: f32) -> String {
    format!("translate3d({:.3}vw, {:.3}vh, 0)", dx_vw, dy_vh)
}

/// Cloud cluster position along its pass.
pub fn translate_vw_scale(x_vw: f32, scale: f32) -> String {
    format!("translate3d({:.3}vw, 0, 0) scale({:.3})", x_vw, scale)
}

/// Marker centred on a normalised point.
pub fn marker_position(pos: Vec2) -> (String, String) {
    (percent(pos.x * 100.0), percent(pos.y * 100.0))
}

#[inline]
pub fn percent(v: f32) -> String {
    format!("{:.3}%", v)
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}

#[inline]
pub fn opacity(v: f32) -> String {
    format!("{:.3}", v.clamp(0.0, 1.0))
}

/// Blur filter, or `none` when the tier has scaled it away.
pub fn blur(px_radius: f32) -> String {
    if px_radius > 0.05 {
        format!("blur({:.1}px)", px_radius)
    } else {
        "none".to_string()
    }
}

/// Night glow halo around a particle; `none` in daylight.
pub fn glow_shadow(glow: f32, size_px: f32) -> String {
    if glow <= 0.0 {
        return "none".to_string();
    }
    format!(
        "0 0 {:.1}px rgba(255,255,255,{:.3})",
        (size_px * 3.0).max(6.0),
        glow.clamp(0.0, 1.0)
    )
}
