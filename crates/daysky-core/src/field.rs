//! Seeded procedural layout: drifting particles, cloud clusters and stars.
//!
//! Generated once per mount. Everything that moves afterwards is derived from
//! elapsed time and these static parameters (see `motion`).

use crate::config::{count, EngineConfig, SampleRange};
use crate::constants::*;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: f32,
    pub drift_x: f32, // vw
    pub drift_y: f32, // vh
    pub duration_sec: f32,
    pub delay_sec: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub blur_px: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloudCluster {
    pub top_pct: f32,
    pub scale: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    /// Depth layer: 0 far, 1 mid, 2 near.
    pub tier: u8,
    pub blobs: SmallVec<[Blob; 8]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: f32,
    pub twinkle_delay_sec: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProceduralField {
    pub particles: Vec<Particle>,
    pub clouds: Vec<CloudCluster>,
    pub stars: Vec<Star>,
}

#[derive(Clone, Copy)]
enum Stream {
    Particles = 1,
    Clouds = 2,
    Stars = 3,
}

/// Independent generator per kind so one count never shifts another layout.
fn stream_rng(seed: u64, stream: Stream) -> StdRng {
    let mix = seed ^ (stream as u64).wrapping_mul(SEED_MIX);
    StdRng::seed_from_u64(mix)
}

/// Full 64-bit seed from two uniform draws in `[0, 1)`, such as two calls to
/// a host `Math.random()`. Each draw fills 32 bits.
pub fn seed_from_draws(hi: f64, lo: f64) -> u64 {
    let word = |u: f64| {
        if u.is_finite() {
            (u.clamp(0.0, 1.0) * 4_294_967_296.0).min(u32::MAX as f64) as u64
        } else {
            0
        }
    };
    (word(hi) << 32) | word(lo)
}

#[inline]
fn draw(rng: &mut StdRng, [min, max]: [f32; 2]) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

#[inline]
fn draw_in(rng: &mut StdRng, range: &SampleRange) -> f32 {
    range.lerp(rng.gen::<f32>())
}

impl ProceduralField {
    /// Pure in `(config, seed)`: the same inputs always give the same field.
    pub fn generate(config: &EngineConfig, seed: u64) -> Self {
        let field = Self {
            particles: generate_particles(config, seed),
            clouds: generate_clouds(config, seed),
            stars: generate_stars(config, seed),
        };
        log::debug!(
            "[field] seed={} particles={} clouds={} stars={}",
            seed,
            field.particles.len(),
            field.clouds.len(),
            field.stars.len()
        );
        field
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.clouds.is_empty() && self.stars.is_empty()
    }
}

fn generate_particles(config: &EngineConfig, seed: u64) -> Vec<Particle> {
    let ranges = [
        ("particleSizePx", &config.particle_size_px),
        ("particleDriftVW", &config.particle_drift_vw),
        ("particleDriftVH", &config.particle_drift_vh),
        ("particleDurationSec", &config.particle_duration_sec),
        ("particleDelaySec", &config.particle_delay_sec),
    ];
    if let Some((name, r)) = ranges.iter().find(|(_, r)| !r.is_valid()) {
        log::warn!("[field] malformed {} [{}, {}]; no particles", name, r.min, r.max);
        return Vec::new();
    }
    let mut rng = stream_rng(seed, Stream::Particles);
    (0..count(config.particle_count))
        .map(|_| Particle {
            left_pct: draw(&mut rng, PARTICLE_LEFT_PCT),
            top_pct: draw(&mut rng, PARTICLE_TOP_PCT),
            size_px: draw_in(&mut rng, &config.particle_size_px),
            drift_x: draw_in(&mut rng, &config.particle_drift_vw),
            drift_y: draw_in(&mut rng, &config.particle_drift_vh),
            duration_sec: draw_in(&mut rng, &config.particle_duration_sec),
            delay_sec: draw_in(&mut rng, &config.particle_delay_sec),
        })
        .collect()
}

fn generate_clouds(config: &EngineConfig, seed: u64) -> Vec<CloudCluster> {
    let duration = &config.cloud_duration_sec;
    if !duration.is_valid() {
        log::warn!(
            "[field] malformed cloudDurationSec [{}, {}]; no clouds",
            duration.min,
            duration.max
        );
        return Vec::new();
    }
    let mut rng = stream_rng(seed, Stream::Clouds);
    let blobs = count(config.blobs_per_cloud);
    (0..count(config.cloud_count))
        .map(|i| {
            let tier = i % CLOUD_TIER_SCALES.len();
            let duration_sec = draw_in(&mut rng, duration);
            let top_pct = match CLOUD_TOP_PRESETS_PCT.get(i) {
                Some(&top) => top,
                None => draw(&mut rng, CLOUD_TOP_PCT),
            };
            let delay_sec = draw(&mut rng, CLOUD_DELAY_SEC);
            let blobs = (0..blobs)
                .map(|_| Blob {
                    x: draw(&mut rng, BLOB_X_PX),
                    y: draw(&mut rng, BLOB_Y_PX),
                    w: draw(&mut rng, BLOB_W_PX),
                    h: draw(&mut rng, BLOB_H_PX),
                    blur_px: draw(&mut rng, BLOB_BLUR_PX),
                    alpha: draw(&mut rng, BLOB_ALPHA),
                })
                .collect();
            CloudCluster {
                top_pct,
                scale: CLOUD_TIER_SCALES[tier],
                duration_sec,
                delay_sec,
                tier: tier as u8,
                blobs,
            }
        })
        .collect()
}

fn generate_stars(config: &EngineConfig, seed: u64) -> Vec<Star> {
    let mut rng = stream_rng(seed, Stream::Stars);
    (0..count(config.star_count))
        .map(|_| Star {
            size_px: draw(&mut rng, STAR_SIZE_PX),
            left_pct: draw(&mut rng, STAR_POS_PCT),
            top_pct: draw(&mut rng, STAR_POS_PCT),
            twinkle_delay_sec: draw(&mut rng, STAR_DELAY_SEC),
        })
        .collect()
}
