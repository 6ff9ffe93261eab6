//! The two seams between the engine and whatever hosts it.

use crate::config::TierProfile;
use crate::error::{HostError, SurfaceError};
use crate::field::ProceduralField;
use crate::motion::{CloudPose, ParticlePose};
use crate::sky::CycleState;
use crate::trail::TrailPose;
use glam::Vec2;

/// A drawable area with a fixed set of nodes.
///
/// `build` runs once per mount and creates one node per field entry and
/// trail point; the `paint_*` calls then only update those nodes. A surface
/// hosts one engine at a time: `build` claims it (or fails with
/// `SurfaceError::Occupied`) and `clear` releases it.
pub trait Surface {
    /// Viewport size in CSS pixels.
    fn viewport(&self) -> Vec2;
    fn build(
        &mut self,
        field: &ProceduralField,
        trail_len: usize,
        profile: &TierProfile,
    ) -> Result<(), SurfaceError>;
    fn paint_sky(&mut self, sky: &CycleState);
    fn paint_particle(&mut self, index: usize, pose: &ParticlePose);
    fn paint_cloud(&mut self, index: usize, pose: &CloudPose);
    fn paint_star(&mut self, index: usize, opacity: f32);
    fn paint_trail(&mut self, index: usize, pose: &TrailPose);
    /// Removes everything `build` created and releases the claim. Must
    /// tolerate being called twice, and must leave a surface claimed by
    /// someone else untouched.
    fn clear(&mut self);
}

/// Opaque handle of a scheduled frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

/// Frame scheduling plus the host signals the engine reads.
pub trait FrameHost {
    /// Milliseconds on the same timeline as frame timestamps.
    fn now_ms(&self) -> f64;
    fn request_frame(&mut self) -> Result<FrameToken, HostError>;
    fn cancel_frame(&mut self, token: FrameToken) -> Result<(), HostError>;
    fn is_visible(&self) -> bool;
    fn prefers_reduced_motion(&self) -> bool;
    /// Browser engine identification, e.g. a user agent.
    fn engine_id(&self) -> Option<String>;
    /// Removes every input listener; returns the ones that failed.
    fn detach_listeners(&mut self) -> Vec<HostError>;
}
