use crate::constants::*;
use glam::Vec2;

/// Render attributes of one trail point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPose {
    pub pos: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

/// Chain of points easing after the pointer, each chasing its predecessor.
///
/// Input only overwrites `target`; points move in `step`, once per frame, so
/// the trail speed does not depend on how often the pointer reports.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    points: Vec<Vec2>,
    target: Vec2,
    follow: f32,
    head_follow: f32,
    base_opacity: f32,
    pointer_seen: bool,
}

impl CursorTrail {
    pub fn new(len: usize, origin: Vec2, follow: f32) -> Self {
        Self {
            points: vec![origin; len],
            target: origin,
            follow,
            head_follow: (follow + TRAIL_HEAD_BONUS).min(1.0),
            base_opacity: TRAIL_BASE_OPACITY,
            pointer_seen: false,
        }
    }

    /// Starts a chain that already knows where the pointer is.
    pub fn at_pointer(len: usize, pointer: Vec2, follow: f32) -> Self {
        let mut trail = Self::new(len, pointer, follow);
        trail.pointer_seen = true;
        trail
    }

    pub fn empty() -> Self {
        Self::new(0, Vec2::ZERO, 0.0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn pointer_seen(&self) -> bool {
        self.pointer_seen
    }

    /// Last write wins.
    pub fn set_target(&mut self, pos: Vec2) {
        if pos.is_finite() {
            self.target = pos;
            self.pointer_seen = true;
        }
    }

    /// Moves an idle chain to a new viewport centre; ignored once the pointer
    /// has been seen.
    pub fn recenter(&mut self, center: Vec2) {
        if self.pointer_seen || !center.is_finite() {
            return;
        }
        self.target = center;
        self.points.fill(center);
    }

    pub fn step(&mut self) {
        let Some((head, body)) = self.points.split_first_mut() else {
            return;
        };
        *head += (self.target - *head) * self.head_follow;
        let mut prev = *head;
        for p in body {
            *p += (prev - *p) * self.follow;
            prev = *p;
        }
    }

    pub fn pose(&self, i: usize) -> Option<TrailPose> {
        let pos = *self.points.get(i)?;
        let t = i as f32 / self.points.len() as f32;
        Some(TrailPose {
            pos,
            scale: 1.0 - t * TRAIL_SCALE_TAPER,
            opacity: self.base_opacity * (1.0 - t * TRAIL_OPACITY_TAPER),
        })
    }

    pub fn poses(&self) -> impl Iterator<Item = TrailPose> + '_ {
        (0..self.points.len()).filter_map(move |i| self.pose(i))
    }
}
