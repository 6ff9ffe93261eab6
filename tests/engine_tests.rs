// Host-side tests for the render scheduler.
// A fake surface and a fake frame host record every call into a shared log,
// and frames are driven by hand with virtual timestamps.

use daysky_core::*;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const CHROME: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 Safari/604.1";
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

#[derive(Default)]
struct Log {
    ops: Vec<&'static str>,
    requested: Vec<i32>,
    cancelled: Vec<i32>,
    detach_calls: usize,
    built_trail: usize,
    built_blur: Option<f32>,
    last_sky: Option<CycleState>,
    last_trail: Vec<TrailPose>,
}

impl Log {
    fn count(&self, op: &str) -> usize {
        self.ops.iter().filter(|o| **o == op).count()
    }
}

type Shared = Rc<RefCell<Log>>;

/// `element` stands in for the mount element's "hosts a sky" marker, shared
/// by every surface built on the same element.
struct FakeSurface {
    log: Shared,
    viewport: Vec2,
    fail_build: bool,
    element: Rc<Cell<bool>>,
    claimed: bool,
}

impl Surface for FakeSurface {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn build(
        &mut self,
        _field: &ProceduralField,
        trail_len: usize,
        profile: &TierProfile,
    ) -> Result<(), SurfaceError> {
        let mut log = self.log.borrow_mut();
        log.ops.push("build");
        if !self.claimed {
            if self.element.get() {
                return Err(SurfaceError::Occupied);
            }
            self.element.set(true);
            self.claimed = true;
        }
        if self.fail_build {
            return Err(SurfaceError::Dom("appendChild refused".into()));
        }
        log.built_trail = trail_len;
        log.built_blur = Some(profile.blur_scale);
        Ok(())
    }

    fn paint_sky(&mut self, sky: &CycleState) {
        let mut log = self.log.borrow_mut();
        log.ops.push("sky");
        log.last_sky = Some(*sky);
        log.last_trail.clear();
    }

    fn paint_particle(&mut self, _index: usize, _pose: &ParticlePose) {
        self.log.borrow_mut().ops.push("particle");
    }

    fn paint_cloud(&mut self, _index: usize, _pose: &CloudPose) {
        self.log.borrow_mut().ops.push("cloud");
    }

    fn paint_star(&mut self, _index: usize, _opacity: f32) {
        self.log.borrow_mut().ops.push("star");
    }

    fn paint_trail(&mut self, _index: usize, pose: &TrailPose) {
        let mut log = self.log.borrow_mut();
        log.ops.push("trail");
        log.last_trail.push(*pose);
    }

    fn clear(&mut self) {
        self.log.borrow_mut().ops.push("clear");
        if self.claimed {
            self.element.set(false);
            self.claimed = false;
        }
    }
}

struct FakeHost {
    log: Shared,
    now: f64,
    next_token: i32,
    visible: bool,
    reduced_motion: bool,
    user_agent: Option<String>,
    fail_request: bool,
}

impl FrameHost for FakeHost {
    fn now_ms(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> Result<FrameToken, HostError> {
        if self.fail_request {
            return Err(HostError::call("requestAnimationFrame", "blocked"));
        }
        self.next_token += 1;
        self.log.borrow_mut().requested.push(self.next_token);
        Ok(FrameToken(self.next_token))
    }

    fn cancel_frame(&mut self, token: FrameToken) -> Result<(), HostError> {
        self.log.borrow_mut().cancelled.push(token.0);
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn engine_id(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn detach_listeners(&mut self) -> Vec<HostError> {
        self.log.borrow_mut().detach_calls += 1;
        Vec::new()
    }
}

type TestEngine = Engine<FakeSurface, FakeHost>;

struct Rig {
    log: Shared,
    surface: FakeSurface,
    host: FakeHost,
}

fn rig() -> Rig {
    rig_on(Rc::default())
}

fn rig_on(element: Rc<Cell<bool>>) -> Rig {
    let log = Shared::default();
    Rig {
        surface: FakeSurface {
            log: log.clone(),
            viewport: VIEWPORT,
            fail_build: false,
            element,
            claimed: false,
        },
        host: FakeHost {
            log: log.clone(),
            now: 1_000.0,
            next_token: 0,
            visible: true,
            reduced_motion: false,
            user_agent: Some(CHROME.to_string()),
            fail_request: false,
        },
        log,
    }
}

fn scenario() -> EngineConfig {
    EngineConfig {
        particle_count: 10,
        trail_count: 6,
        cloud_count: 2,
        blobs_per_cloud: 3,
        ..EngineConfig::default()
    }
}

fn engine(rig: Rig, config: EngineConfig) -> (TestEngine, Shared) {
    (Engine::new(rig.surface, rig.host, config), rig.log)
}

fn started(config: EngineConfig) -> (TestEngine, Shared) {
    let (mut e, log) = engine(rig(), config);
    e.start(42).unwrap();
    (e, log)
}

/// Delivers the pending frame, if any, at `ms`.
fn tick(e: &mut TestEngine, ms: f64) -> bool {
    if e.pending_frame().is_none() {
        return false;
    }
    e.host_mut().now = ms;
    e.on_frame(ms);
    true
}

#[test]
fn scenario_start() {
    let (e, log) = started(scenario());
    assert_eq!(e.state(), EngineState::Running);
    assert_eq!(e.tier(), CapabilityTier::High);
    assert_eq!(e.field().particles.len(), 10);
    assert_eq!(e.field().clouds.len(), 2);
    assert!(e.field().clouds.iter().all(|c| c.blobs.len() == 3));
    assert_eq!(e.trail().len(), 6);
    assert!(e.trail().points().iter().all(|&p| p == VIEWPORT * 0.5));

    let log = log.borrow();
    assert_eq!(log.count("build"), 1);
    assert_eq!(log.built_trail, 6);
    assert_eq!(log.requested.len(), 1);
    assert!(e.pending_frame().is_some());
}

#[test]
fn frame_paints_sky_first_then_the_field_then_the_trail() {
    let (mut e, log) = started(scenario());
    assert!(tick(&mut e, 1_016.0));

    let log = log.borrow();
    let painted: Vec<_> = log.ops.iter().skip_while(|o| **o != "sky").collect();
    assert_eq!(*painted[0], "sky");
    assert_eq!(log.count("sky"), 1);
    assert_eq!(log.count("particle"), 10);
    assert_eq!(log.count("cloud"), 2);
    assert_eq!(log.count("star"), e.field().stars.len());
    assert_eq!(log.count("trail"), 6);
    let first_trail = painted.iter().position(|o| **o == "trail").unwrap();
    let last_field = painted
        .iter()
        .rposition(|o| matches!(**o, "particle" | "cloud" | "star"))
        .unwrap();
    assert!(last_field < first_trail);
    // one frame painted, one more scheduled
    assert_eq!(log.requested.len(), 2);
}

#[test]
fn sky_phase_follows_elapsed_time() {
    let config = EngineConfig {
        cycle_duration_sec: 120.0,
        ..scenario()
    };
    let (mut e, log) = started(config);
    // started at 1000 ms; a quarter cycle later is noon
    tick(&mut e, 1_000.0 + 30_000.0);
    let sky = log.borrow().last_sky.unwrap();
    assert!((sky.phase - 0.25).abs() < 1e-5);
    assert_eq!(sky.inner.to_u8(), constants::NOON);

    // a full cycle later the sky is back where it was
    tick(&mut e, 1_000.0 + 150_000.0);
    let again = log.borrow().last_sky.unwrap();
    assert!((again.phase - 0.25).abs() < 1e-5);
}

#[test]
fn pause_skips_painting_but_keeps_scheduling() {
    let (mut e, log) = started(scenario());
    e.on_visibility(false);
    assert_eq!(e.state(), EngineState::Paused);

    tick(&mut e, 1_016.0);
    tick(&mut e, 1_032.0);
    assert_eq!(log.borrow().count("sky"), 0);
    assert_eq!(log.borrow().requested.len(), 3);

    e.on_visibility(true);
    assert_eq!(e.state(), EngineState::Running);
    tick(&mut e, 1_048.0);
    assert_eq!(log.borrow().count("sky"), 1);
}

#[test]
fn hidden_page_starts_paused() {
    let mut r = rig();
    r.host.visible = false;
    let (mut e, _log) = engine(r, scenario());
    e.start(1).unwrap();
    assert_eq!(e.state(), EngineState::Paused);
    assert!(e.is_active());
}

#[test]
fn stop_is_idempotent_and_ends_the_loop() {
    let (mut e, log) = started(scenario());
    tick(&mut e, 1_016.0);
    let pending = e.pending_frame().unwrap();

    e.stop();
    assert_eq!(e.state(), EngineState::Stopped);
    assert!(e.pending_frame().is_none());
    assert!(e.field().is_empty());
    assert!(e.trail().is_empty());
    {
        let log = log.borrow();
        assert_eq!(log.cancelled, vec![pending.0]);
        assert_eq!(log.detach_calls, 1);
        assert_eq!(log.count("clear"), 1);
    }

    e.stop();
    e.stop();
    let requested = log.borrow().requested.len();
    // a frame that was already in flight must neither paint nor reschedule
    e.on_frame(2_000.0);
    let log = log.borrow();
    assert_eq!(log.detach_calls, 1);
    assert_eq!(log.count("clear"), 1);
    assert_eq!(log.cancelled.len(), 1);
    assert_eq!(log.requested.len(), requested);
    assert_eq!(log.count("sky"), 1);
}

#[test]
fn stop_from_paused() {
    let (mut e, log) = started(scenario());
    e.on_visibility(false);
    e.stop();
    assert_eq!(e.state(), EngineState::Stopped);
    assert_eq!(log.borrow().count("clear"), 1);
}

#[test]
fn stop_before_start_does_nothing() {
    let (mut e, log) = engine(rig(), scenario());
    e.stop();
    assert_eq!(e.state(), EngineState::Uninitialized);
    assert_eq!(log.borrow().detach_calls, 0);
    assert!(log.borrow().ops.is_empty());
    e.start(3).unwrap();
    assert_eq!(e.state(), EngineState::Running);
}

#[test]
fn stopped_engine_cannot_restart() {
    let (mut e, _log) = started(scenario());
    assert!(matches!(
        e.start(2),
        Err(EngineError::NotStartable(EngineState::Running))
    ));
    e.stop();
    assert!(matches!(
        e.start(2),
        Err(EngineError::NotStartable(EngineState::Stopped))
    ));
}

#[test]
fn drop_tears_down() {
    let (e, log) = started(scenario());
    drop(e);
    let log = log.borrow();
    assert_eq!(log.cancelled.len(), 1);
    assert_eq!(log.detach_calls, 1);
    assert_eq!(log.count("clear"), 1);
}

#[test]
fn reduced_motion_prevents_start() {
    let mut r = rig();
    r.host.reduced_motion = true;
    let (mut e, log) = engine(r, scenario());
    assert!(matches!(e.start(42), Err(EngineError::ReducedMotion)));
    assert_eq!(e.state(), EngineState::Uninitialized);
    let log = log.borrow();
    assert!(log.ops.is_empty());
    assert!(log.requested.is_empty());
}

#[test]
fn reduced_motion_change_stops_a_running_engine() {
    let (mut e, log) = started(scenario());
    e.on_reduced_motion(false);
    assert_eq!(e.state(), EngineState::Running);
    e.on_reduced_motion(true);
    assert_eq!(e.state(), EngineState::Stopped);
    assert_eq!(log.borrow().count("clear"), 1);
    assert!(!tick(&mut e, 5_000.0));
}

#[test]
fn disabled_config_never_starts() {
    let config = EngineConfig {
        enabled: false,
        ..scenario()
    };
    let (mut e, log) = engine(rig(), config);
    assert!(matches!(e.start(42), Err(EngineError::Disabled)));
    assert!(log.borrow().ops.is_empty());
    assert!(e.pending_frame().is_none());
}

#[test]
fn failed_build_leaves_nothing_behind() {
    let mut r = rig();
    r.surface.fail_build = true;
    let (mut e, log) = engine(r, scenario());
    assert!(matches!(e.start(42), Err(EngineError::Surface(_))));
    assert_eq!(e.state(), EngineState::Uninitialized);
    assert!(e.pending_frame().is_none());
    assert!(e.field().is_empty());
    let log = log.borrow();
    assert!(log.requested.is_empty());
    assert_eq!(log.count("clear"), 1);
}

#[test]
fn failed_schedule_clears_the_surface() {
    let mut r = rig();
    r.host.fail_request = true;
    let (mut e, log) = engine(r, scenario());
    assert!(matches!(e.start(42), Err(EngineError::Host(_))));
    assert_eq!(e.state(), EngineState::Uninitialized);
    let log = log.borrow();
    assert_eq!(log.count("build"), 1);
    assert_eq!(log.count("clear"), 1);
}

#[test]
fn low_tier_caps_everything() {
    let mut r = rig();
    r.host.user_agent = Some(IPHONE.to_string());
    let (mut e, log) = engine(r, EngineConfig::default());
    e.start(7).unwrap();
    assert_eq!(e.tier(), CapabilityTier::Low);
    assert_eq!(e.field().particles.len(), constants::LOW_MAX_PARTICLES as usize);
    assert_eq!(e.field().clouds.len(), constants::LOW_MAX_CLOUDS as usize);
    assert!(e
        .field()
        .clouds
        .iter()
        .all(|c| c.blobs.len() == constants::LOW_MAX_BLOBS as usize));
    assert_eq!(e.field().stars.len(), constants::LOW_MAX_STARS as usize);
    assert_eq!(e.trail().len(), constants::LOW_MAX_TRAIL as usize);
    assert_eq!(log.borrow().built_blur, Some(constants::LOW_BLUR_SCALE));
}

#[test]
fn unknown_user_agent_is_low() {
    let mut r = rig();
    r.host.user_agent = None;
    let (e, _log) = engine(r, EngineConfig::default());
    assert_eq!(e.tier(), CapabilityTier::Low);
}

#[test]
fn field_is_stable_across_frames_and_resizes() {
    let (mut e, _log) = started(EngineConfig::default());
    let before = e.field().clone();
    for i in 1..=120 {
        tick(&mut e, 1_000.0 + i as f64 * 16.7);
        if i % 30 == 0 {
            e.on_resize(Vec2::new(800.0 + i as f32, 600.0));
        }
    }
    assert_eq!(*e.field(), before);
}

#[test]
fn resize_recenters_an_untouched_trail_only() {
    let (mut e, _log) = started(scenario());
    e.on_resize(Vec2::new(800.0, 600.0));
    assert!(e
        .trail()
        .points()
        .iter()
        .all(|&p| p == Vec2::new(400.0, 300.0)));

    e.on_pointer(Vec2::new(10.0, 20.0));
    e.on_resize(Vec2::new(1000.0, 1000.0));
    assert_eq!(e.trail().target(), Vec2::new(10.0, 20.0));
}

#[test]
fn scenario_trail_follows_the_pointer() {
    let config = EngineConfig {
        trail_follow: 0.2,
        ..scenario()
    };
    let (mut e, log) = started(config);
    let target = Vec2::new(100.0, 100.0);
    e.on_pointer(target);
    for i in 1..=50 {
        tick(&mut e, 1_000.0 + i as f64 * 16.0);
    }

    let points = e.trail().points();
    assert!(points[0].distance(target) < 1.0);
    for pair in points.windows(2) {
        assert!(pair[1].distance(target) + 1e-3 >= pair[0].distance(target));
    }
    let poses = log.borrow().last_trail.clone();
    assert_eq!(poses.len(), 6);
    assert_eq!(poses[0].pos, points[0]);
}

#[test]
fn paused_trail_holds_still() {
    let (mut e, _log) = started(scenario());
    e.on_pointer(Vec2::new(0.0, 0.0));
    e.on_visibility(false);
    let before = e.trail().points().to_vec();
    tick(&mut e, 1_016.0);
    tick(&mut e, 1_032.0);
    assert_eq!(e.trail().points(), &before[..]);
}

#[test]
fn pointer_before_start_seeds_the_trail() {
    let (mut e, _log) = engine(rig(), scenario());
    e.on_pointer(Vec2::new(50.0, 60.0));
    e.on_pointer(Vec2::new(f32::NAN, 1.0));
    e.start(42).unwrap();
    assert!(e
        .trail()
        .points()
        .iter()
        .all(|&p| p == Vec2::new(50.0, 60.0)));
    assert!(e.trail().pointer_seen());
}

#[test]
fn hidden_trail_builds_no_points() {
    let config = EngineConfig {
        show_trail: false,
        ..scenario()
    };
    let (mut e, log) = started(config);
    tick(&mut e, 1_016.0);
    assert_eq!(log.borrow().built_trail, 0);
    assert_eq!(log.borrow().count("trail"), 0);
}

#[test]
fn self_stop_frees_the_element_for_a_new_mount() {
    let element: Rc<Cell<bool>> = Rc::default();
    let (mut first, _log) = engine(rig_on(element.clone()), scenario());
    first.start(1).unwrap();
    assert!(element.get());

    // a second engine on the same element is refused and leaves the first alone
    let (mut second, second_log) = engine(rig_on(element.clone()), scenario());
    assert!(matches!(
        second.start(2),
        Err(EngineError::Surface(SurfaceError::Occupied))
    ));
    assert!(second_log.borrow().requested.is_empty());
    assert!(element.get());
    assert_eq!(first.state(), EngineState::Running);

    // the engine stops itself; nobody calls stop from outside
    first.on_reduced_motion(true);
    assert_eq!(first.state(), EngineState::Stopped);
    assert!(!element.get());

    let (mut third, _log) = engine(rig_on(element.clone()), scenario());
    third.start(3).unwrap();
    assert_eq!(third.state(), EngineState::Running);
    assert!(element.get());
}

#[test]
fn every_teardown_path_frees_the_element() {
    let element: Rc<Cell<bool>> = Rc::default();

    let (mut e, _log) = engine(rig_on(element.clone()), scenario());
    e.start(1).unwrap();
    e.stop();
    assert!(!element.get());

    let (mut e, _log) = engine(rig_on(element.clone()), scenario());
    e.start(1).unwrap();
    drop(e);
    assert!(!element.get());

    let mut r = rig_on(element.clone());
    r.host.fail_request = true;
    let (mut e, _log) = engine(r, scenario());
    assert!(e.start(1).is_err());
    assert!(!element.get());
}
