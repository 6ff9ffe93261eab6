use glam::Vec2;

// Shared tuning constants for the sky, field and trail.

// Day cycle
pub const DEFAULT_CYCLE_SECS: f32 = 120.0;

// Sky anchors (sRGB bytes)
pub const DAWN: [u8; 3] = [255, 237, 213];
pub const NOON: [u8; 3] = [147, 197, 253];
pub const SUNSET: [u8; 3] = [252, 165, 165];
pub const NIGHT: [u8; 3] = [99, 102, 241];

// Rim (outer stop) = inner mixed toward the ramp one segment ahead
pub const RIM_LEAD: f32 = 0.25;
pub const RIM_CONTRAST: f32 = 0.6;

// Sun/moon marker
pub const ORBIT_CENTER: Vec2 = Vec2::new(0.5, 0.52);
pub const ORBIT_RADII: Vec2 = Vec2::new(0.42, 0.32);
pub const ORBIT_ANGLE_OFFSET_DEG: f32 = -180.0; // left horizon at dawn, top at noon
pub const MARKER_WARM: [u8; 3] = [249, 115, 22];
pub const MARKER_SUN: [u8; 3] = [250, 204, 21];
pub const MARKER_COOL: [u8; 3] = [147, 197, 253];

// Cloud tint anchors
pub const CLOUD_WARM: [u8; 3] = [255, 223, 186];
pub const CLOUD_WHITE: [u8; 3] = [255, 255, 255];
pub const CLOUD_GOLDEN: [u8; 3] = [255, 196, 160];
pub const CLOUD_BLUE: [u8; 3] = [180, 200, 255];

// Night window (phase)
pub const NIGHT_RISE: [f32; 2] = [0.70, 0.80];
pub const NIGHT_FALL: [f32; 2] = [0.95, 1.0];
pub const NIGHT_GLOW_MAX: f32 = 0.6;

// Particle placement and motion
pub const PARTICLE_LEFT_PCT: [f32; 2] = [3.0, 97.0];
pub const PARTICLE_TOP_PCT: [f32; 2] = [5.0, 95.0];
pub const PARTICLE_OPACITY_MIN: f32 = 0.25;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.55;

// Cloud clusters
pub const CLOUD_TIER_SCALES: [f32; 3] = [0.9, 1.05, 1.2];
pub const CLOUD_TOP_PRESETS_PCT: [f32; 6] = [18.0, 35.0, 58.0, 72.0, 26.0, 45.0];
pub const CLOUD_TOP_PCT: [f32; 2] = [20.0, 76.0];
pub const CLOUD_DELAY_SEC: [f32; 2] = [0.0, 180.0];
pub const CLOUD_TRAVEL_VW: [f32; 2] = [-45.0, 110.0]; // enter left, exit right
pub const CLOUD_EDGE_FADE: f32 = 0.08; // fraction of a pass spent fading in/out

// Cloud blobs (px, relative to the cluster)
pub const BLOB_X_PX: [f32; 2] = [-50.0, 180.0];
pub const BLOB_Y_PX: [f32; 2] = [-24.0, 42.0];
pub const BLOB_W_PX: [f32; 2] = [140.0, 260.0];
pub const BLOB_H_PX: [f32; 2] = [70.0, 150.0];
pub const BLOB_BLUR_PX: [f32; 2] = [16.0, 30.0];
pub const BLOB_ALPHA: [f32; 2] = [0.35, 0.7];

// Stars
pub const STAR_SIZE_PX: [f32; 2] = [1.0, 3.0];
pub const STAR_POS_PCT: [f32; 2] = [0.0, 100.0];
pub const STAR_DELAY_SEC: [f32; 2] = [0.0, 8.0];
pub const STAR_TWINKLE_SEC: f32 = 4.0;
pub const STAR_TWINKLE_BASE: f32 = 0.55;
pub const STAR_TWINKLE_SPAN: f32 = 0.45;

// Cursor trail
pub const TRAIL_HEAD_BONUS: f32 = 0.08; // head eases a bit faster than the body
pub const TRAIL_FOLLOW_RANGE: [f32; 2] = [0.01, 0.95];
pub const TRAIL_SCALE_TAPER: f32 = 0.7; // head 1.0 -> tail ~0.3
pub const TRAIL_OPACITY_TAPER: f32 = 0.86;
pub const TRAIL_BASE_OPACITY: f32 = 0.9;

// Low tier caps
pub const LOW_MAX_PARTICLES: i32 = 10;
pub const LOW_MAX_TRAIL: i32 = 6;
pub const LOW_MAX_CLOUDS: i32 = 3;
pub const LOW_MAX_BLOBS: i32 = 5;
pub const LOW_MAX_STARS: i32 = 40;
pub const LOW_BLUR_SCALE: f32 = 0.5;

// Stream salts for per-kind generators
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
