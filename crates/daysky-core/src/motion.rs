//! Per-frame poses for the static field.
//!
//! Pure functions of elapsed seconds and generated parameters: a periodic
//! offset, not a simulation, so nothing here carries state between frames.

use crate::color::Rgba;
use crate::constants::*;
use crate::field::{CloudCluster, Particle, Star};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticlePose {
    pub dx_vw: f32,
    pub dy_vh: f32,
    pub opacity: f32,
    pub glow: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudPose {
    pub x_vw: f32,
    pub scale: f32,
    pub opacity: f32,
    pub tint: Rgba,
}

/// Position within a repeating loop of `duration_sec`, shifted by `delay_sec`.
pub fn loop_progress(elapsed_sec: f64, duration_sec: f32, delay_sec: f32) -> f32 {
    if !(duration_sec.is_finite() && duration_sec > 0.0) {
        return 0.0;
    }
    let u = ((elapsed_sec + delay_sec as f64) / duration_sec as f64).rem_euclid(1.0) as f32;
    if u >= 1.0 {
        0.0
    } else {
        u
    }
}

pub fn particle_pose(p: &Particle, elapsed_sec: f64, night_glow: f32) -> ParticlePose {
    let u = loop_progress(elapsed_sec, p.duration_sec, p.delay_sec);
    // out and back along the drift vector, rising
    let wave = 0.5 - 0.5 * (TAU * u).cos();
    ParticlePose {
        dx_vw: p.drift_x * wave,
        dy_vh: -p.drift_y * wave,
        opacity: PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN * (PI * u).sin(),
        glow: night_glow,
    }
}

pub fn cloud_pose(c: &CloudCluster, elapsed_sec: f64, tint: Rgba) -> CloudPose {
    let u = loop_progress(elapsed_sec, c.duration_sec, c.delay_sec);
    let [from, to] = CLOUD_TRAVEL_VW;
    let fade_in = (u / CLOUD_EDGE_FADE).min(1.0);
    let fade_out = ((1.0 - u) / CLOUD_EDGE_FADE).min(1.0);
    CloudPose {
        x_vw: from + (to - from) * u,
        scale: c.scale,
        opacity: fade_in * fade_out,
        tint,
    }
}

pub fn star_opacity(s: &Star, elapsed_sec: f64, night: f32) -> f32 {
    if night <= 0.0 {
        return 0.0;
    }
    let u = loop_progress(elapsed_sec, STAR_TWINKLE_SEC, s.twinkle_delay_sec);
    night * (STAR_TWINKLE_BASE + STAR_TWINKLE_SPAN * (TAU * u).sin())
}
