//! Engine options and capability tiers.
//!
//! `EngineConfig` is what a host passes in (every field optional when
//! decoded from JSON/JS); `CapabilityTier` caps it down for weaker browsers.

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` pair sampled uniformly at generation time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct SampleRange {
    pub min: f32,
    pub max: f32,
}

impl SampleRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Finite and ordered; anything else generates nothing.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    #[inline]
    pub fn lerp(&self, u: f32) -> f32 {
        self.min + u * (self.max - self.min)
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

impl From<[f32; 2]> for SampleRange {
    fn from([min, max]: [f32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<SampleRange> for [f32; 2] {
    fn from(r: SampleRange) -> Self {
        [r.min, r.max]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub particle_count: i32,
    pub particle_size_px: SampleRange,
    #[serde(rename = "particleDriftVW")]
    pub particle_drift_vw: SampleRange,
    #[serde(rename = "particleDriftVH")]
    pub particle_drift_vh: SampleRange,
    pub particle_duration_sec: SampleRange,
    pub particle_delay_sec: SampleRange,
    pub cloud_count: i32,
    pub blobs_per_cloud: i32,
    pub cloud_duration_sec: SampleRange,
    pub tint_alpha: f32,
    pub star_count: i32,
    pub trail_count: i32,
    pub trail_follow: f32,
    pub cycle_duration_sec: f32,
    pub enabled: bool,
    pub show_trail: bool,
    /// Fixed layout seed; a fresh one is drawn per mount when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particle_count: 16,
            particle_size_px: SampleRange::new(3.0, 6.0),
            particle_drift_vw: SampleRange::new(2.0, 5.5),
            particle_drift_vh: SampleRange::new(4.0, 10.0),
            particle_duration_sec: SampleRange::new(70.0, 120.0),
            particle_delay_sec: SampleRange::new(0.0, 60.0),
            cloud_count: 4,
            blobs_per_cloud: 7,
            cloud_duration_sec: SampleRange::new(180.0, 300.0),
            tint_alpha: 0.58,
            star_count: 80,
            trail_count: 10,
            trail_follow: 0.22,
            cycle_duration_sec: DEFAULT_CYCLE_SECS,
            enabled: true,
            show_trail: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Applies the tier's caps. High leaves the counts untouched.
    pub fn scaled_for(&self, tier: CapabilityTier) -> Self {
        let profile = tier.profile();
        Self {
            particle_count: self.particle_count.min(profile.max_particles),
            cloud_count: self.cloud_count.min(profile.max_clouds),
            blobs_per_cloud: self.blobs_per_cloud.min(profile.max_blobs),
            star_count: self.star_count.min(profile.max_stars),
            trail_count: self.trail_count.min(profile.max_trail),
            ..self.clone()
        }
    }

    /// Number of trail points actually drawn.
    pub fn trail_len(&self) -> usize {
        if self.show_trail {
            count(self.trail_count)
        } else {
            0
        }
    }

    pub fn follow(&self) -> f32 {
        let [lo, hi] = TRAIL_FOLLOW_RANGE;
        if self.trail_follow.is_finite() {
            self.trail_follow.clamp(lo, hi)
        } else {
            EngineConfig::default().trail_follow
        }
    }

    pub fn tint_alpha(&self) -> f32 {
        if self.tint_alpha.is_finite() {
            self.tint_alpha.clamp(0.0, 1.0)
        } else {
            EngineConfig::default().tint_alpha
        }
    }
}

/// Counts at or below zero mean "none".
#[inline]
pub fn count(n: i32) -> usize {
    n.max(0) as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityTier {
    Low,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierProfile {
    pub max_particles: i32,
    pub max_trail: i32,
    pub max_clouds: i32,
    pub max_blobs: i32,
    pub max_stars: i32,
    pub blur_scale: f32,
}

impl CapabilityTier {
    /// Classifies a browser engine identification string (a user agent).
    ///
    /// Chromium and Gecko on desktop/Android get the full effect set. Every
    /// iOS browser is WebKit underneath, so those, Safari and anything
    /// unrecognised fall back to `Low`.
    pub fn detect(engine_id: Option<&str>) -> Self {
        let Some(ua) = engine_id.map(str::trim).filter(|s| !s.is_empty()) else {
            return CapabilityTier::Low;
        };
        let ios = ["iPhone", "iPad", "iPod", "CriOS/", "FxiOS/", "EdgiOS/"]
            .iter()
            .any(|m| ua.contains(m));
        if ios {
            return CapabilityTier::Low;
        }
        let chromium = ["Chrome/", "Chromium/", "Edg/", "OPR/"]
            .iter()
            .any(|m| ua.contains(m));
        let gecko = ua.contains("Firefox/") && ua.contains("Gecko/");
        if chromium || gecko {
            CapabilityTier::High
        } else {
            CapabilityTier::Low
        }
    }

    pub fn profile(self) -> TierProfile {
        match self {
            CapabilityTier::High => TierProfile {
                max_particles: i32::MAX,
                max_trail: i32::MAX,
                max_clouds: i32::MAX,
                max_blobs: i32::MAX,
                max_stars: i32::MAX,
                blur_scale: 1.0,
            },
            CapabilityTier::Low => TierProfile {
                max_particles: LOW_MAX_PARTICLES,
                max_trail: LOW_MAX_TRAIL,
                max_clouds: LOW_MAX_CLOUDS,
                max_blobs: LOW_MAX_BLOBS,
                max_stars: LOW_MAX_STARS,
                blur_scale: LOW_BLUR_SCALE,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityTier::Low => "low",
            CapabilityTier::High => "high",
        }
    }
}
