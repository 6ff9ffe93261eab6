//! The render scheduler: owns the field, the trail and the frame loop.
//!
//! One `Engine` per mount. It is driven entirely from outside: the host calls
//! `on_frame` from its frame callback and forwards pointer, visibility,
//! reduced-motion and resize signals. The engine only ever talks back through
//! `FrameHost` (scheduling, listeners) and `Surface` (painting).

use crate::clock::{elapsed_between, CycleClock};
use crate::config::{CapabilityTier, EngineConfig};
use crate::error::EngineError;
use crate::field::ProceduralField;
use crate::motion;
use crate::sky::CycleState;
use crate::surface::{FrameHost, FrameToken, Surface};
use crate::trail::CursorTrail;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Generating,
    Running,
    Paused,
    Stopped,
}

pub struct Engine<S: Surface, H: FrameHost> {
    state: EngineState,
    tier: CapabilityTier,
    config: EngineConfig,
    clock: CycleClock,
    field: ProceduralField,
    trail: CursorTrail,
    last_pointer: Option<Vec2>,
    origin_ms: f64,
    pending: Option<FrameToken>,
    surface: S,
    host: H,
}

impl<S: Surface, H: FrameHost> Engine<S, H> {
    /// Picks the capability tier from the host and caps `config` to it.
    pub fn new(surface: S, host: H, config: EngineConfig) -> Self {
        let engine_id = host.engine_id();
        let tier = CapabilityTier::detect(engine_id.as_deref());
        log::info!("[tier] {} for {:?}", tier.as_str(), engine_id.unwrap_or_default());
        let config = config.scaled_for(tier);
        Self {
            state: EngineState::Uninitialized,
            tier,
            clock: CycleClock::from_secs_f32(config.cycle_duration_sec),
            config,
            field: ProceduralField::default(),
            trail: CursorTrail::empty(),
            last_pointer: None,
            origin_ms: 0.0,
            pending: None,
            surface,
            host,
        }
    }

    /// Seeds the field, builds the surface and schedules the first frame.
    ///
    /// On error nothing is left on the surface and no frame is pending.
    pub fn start(&mut self, seed: u64) -> Result<(), EngineError> {
        if self.state != EngineState::Uninitialized {
            return Err(EngineError::NotStartable(self.state));
        }
        if !self.config.enabled {
            return Err(EngineError::Disabled);
        }
        if self.host.prefers_reduced_motion() {
            return Err(EngineError::ReducedMotion);
        }

        self.state = EngineState::Generating;
        self.field = ProceduralField::generate(&self.config, seed);
        let len = self.config.trail_len();
        let follow = self.config.follow();
        self.trail = match self.last_pointer {
            Some(pointer) => CursorTrail::at_pointer(len, pointer, follow),
            None => CursorTrail::new(len, self.surface.viewport() * 0.5, follow),
        };

        if let Err(err) = self.surface.build(&self.field, len, &self.tier.profile()) {
            self.abandon();
            return Err(err.into());
        }
        self.origin_ms = self.host.now_ms();
        match self.host.request_frame() {
            Ok(token) => self.pending = Some(token),
            Err(err) => {
                self.abandon();
                return Err(err.into());
            }
        }

        self.state = if self.host.is_visible() {
            EngineState::Running
        } else {
            EngineState::Paused
        };
        log::info!(
            "[sky] started seed={} tier={} particles={} clouds={} stars={} trail={}",
            seed,
            self.tier.as_str(),
            self.field.particles.len(),
            self.field.clouds.len(),
            self.field.stars.len(),
            self.trail.len()
        );
        Ok(())
    }

    fn abandon(&mut self) {
        self.surface.clear();
        self.field = ProceduralField::default();
        self.trail = CursorTrail::empty();
        self.state = EngineState::Uninitialized;
    }

    /// Frame callback. Paints while running, idles while paused, and always
    /// reschedules unless stopped.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        self.pending = None;
        match self.state {
            EngineState::Running => self.paint(timestamp_ms),
            EngineState::Paused => {}
            _ => return,
        }
        match self.host.request_frame() {
            Ok(token) => self.pending = Some(token),
            // the last painted frame stays up as a static backdrop
            Err(err) => log::warn!("[sky] could not schedule next frame: {}", err),
        }
    }

    fn paint(&mut self, timestamp_ms: f64) {
        let elapsed = elapsed_between(self.origin_ms, timestamp_ms);
        let secs = elapsed.as_secs_f64();
        let sky = CycleState::at(self.clock.phase(elapsed), self.config.tint_alpha());

        self.surface.paint_sky(&sky);
        for (i, p) in self.field.particles.iter().enumerate() {
            self.surface
                .paint_particle(i, &motion::particle_pose(p, secs, sky.night_glow));
        }
        for (i, c) in self.field.clouds.iter().enumerate() {
            self.surface
                .paint_cloud(i, &motion::cloud_pose(c, secs, sky.cloud_tint));
        }
        for (i, s) in self.field.stars.iter().enumerate() {
            self.surface
                .paint_star(i, motion::star_opacity(s, secs, sky.night));
        }

        self.trail.step();
        for (i, pose) in self.trail.poses().enumerate() {
            self.surface.paint_trail(i, &pose);
        }
    }

    /// Records the latest pointer position in viewport pixels.
    pub fn on_pointer(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            return;
        }
        self.last_pointer = Some(pos);
        self.trail.set_target(pos);
    }

    pub fn on_visibility(&mut self, visible: bool) {
        let next = match (self.state, visible) {
            (EngineState::Running, false) => EngineState::Paused,
            (EngineState::Paused, true) => EngineState::Running,
            _ => return,
        };
        log::debug!("[sky] {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Reduced motion is an unconditional off switch.
    pub fn on_reduced_motion(&mut self, reduced: bool) {
        if reduced && self.is_active() {
            log::info!("[sky] reduced motion requested; stopping");
            self.stop();
        }
    }

    /// Keeps an untouched trail centred. The field is never regenerated.
    pub fn on_resize(&mut self, viewport: Vec2) {
        if self.is_active() {
            self.trail.recenter(viewport * 0.5);
        }
    }

    /// Cancels the pending frame, detaches listeners and clears the surface.
    ///
    /// Safe to call any number of times. Each step runs even if an earlier
    /// one failed; failures are only logged.
    pub fn stop(&mut self) {
        if !self.is_active() {
            return;
        }
        if let Some(token) = self.pending.take() {
            if let Err(err) = self.host.cancel_frame(token) {
                log::warn!("[sky] cancel frame: {}", err);
            }
        }
        for err in self.host.detach_listeners() {
            log::warn!("[sky] detach listener: {}", err);
        }
        self.surface.clear();
        self.field = ProceduralField::default();
        self.trail = CursorTrail::empty();
        self.state = EngineState::Stopped;
        log::info!("[sky] stopped");
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, EngineState::Running | EngineState::Paused)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &CycleClock {
        &self.clock
    }

    pub fn field(&self) -> &ProceduralField {
        &self.field
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<S: Surface, H: FrameHost> Drop for Engine<S, H> {
    fn drop(&mut self) {
        self.stop();
    }
}
