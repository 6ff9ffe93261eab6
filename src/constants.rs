// DOM wiring constants: classes, attributes and inline base styles.
// The surface styles itself, so a page only has to provide a mount element.

// Mount bookkeeping
pub const MOUNTED_ATTR: &str = "data-daysky-mounted";
pub const FALLBACK_CLASS: &str = "daysky-fallback";

// Media queries and events
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Layer classes (handy for page CSS overrides)
pub const LAYER_CLASS: &str = "daysky-layer";
pub const BACKDROP_CLASS: &str = "daysky-backdrop";
pub const CLOUD_CLASS: &str = "daysky-cloud";
pub const BLOB_CLASS: &str = "daysky-blob";
pub const MARKER_CLASS: &str = "daysky-sunmoon";
pub const STAR_CLASS: &str = "daysky-star";
pub const PARTICLE_CLASS: &str = "daysky-particle";
pub const TRAIL_CLASS: &str = "daysky-trail-dot";

// Inline base styles
pub const LAYER_STYLE: &str =
    "position:absolute;inset:0;overflow:hidden;pointer-events:none;z-index:-50;";
pub const BACKDROP_STYLE: &str = "position:absolute;inset:0;";
pub const CLOUD_STYLE: &str =
    "position:absolute;left:0;width:0;height:0;will-change:transform,opacity;";
pub const BLOB_STYLE: &str = "position:absolute;border-radius:9999px;background:currentColor;";
pub const MARKER_STYLE: &str = "position:absolute;width:50px;height:50px;border-radius:9999px;\
    transform:translate(-50%,-50%);\
    box-shadow:0 0 48px rgba(255,255,255,0.45),0 0 16px rgba(255,255,255,0.25);";
pub const STAR_STYLE: &str =
    "position:absolute;border-radius:9999px;background:#fff;opacity:0;will-change:opacity;";
pub const PARTICLE_STYLE: &str = "position:absolute;border-radius:9999px;\
    background:rgba(255,255,255,0.85);will-change:transform,opacity;";
pub const TRAIL_LAYER_STYLE: &str = "position:fixed;inset:0;pointer-events:none;z-index:40;";

// Trail dot look
pub const TRAIL_DOT_PX: f32 = 14.0;
pub const TRAIL_COLOR: &str = "var(--secondary, #22d3ee)";
pub const TRAIL_GLOW: &str = "rgba(34, 211, 238, 0.55)";
