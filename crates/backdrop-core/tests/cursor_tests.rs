// Host-side tests for the cursor proxy: device gate, teardown, ripples.

use backdrop_core::*;
use glam::Vec2;

#[derive(Default)]
struct FakeHost {
    listening: Vec<CursorEvent>,
    registered_total: usize,
    root_cursor: String,
}

impl CursorHost for FakeHost {
    fn listen(&mut self, event: CursorEvent) {
        self.listening.push(event);
        self.registered_total += 1;
    }

    fn unlisten(&mut self, event: CursorEvent) {
        self.listening.retain(|e| *e != event);
    }

    fn replace_root_cursor(&mut self, value: &str) -> String {
        std::mem::replace(&mut self.root_cursor, value.to_string())
    }
}

fn desktop() -> Environment {
    Environment {
        reduced_motion: false,
        fine_pointer_desktop: true,
        theme: Theme::Dark,
    }
}

#[derive(Default)]
struct StepScheduler {
    next: i32,
}

impl FrameScheduler for StepScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        self.next += 1;
        Some(FrameId(self.next))
    }

    fn cancel_frame(&mut self, _id: FrameId) {}
}

fn mounted(host: &mut FakeHost) -> CursorProxy {
    CursorProxy::mount(&desktop(), CursorConfig::default(), host)
        .expect("valid config")
        .expect("desktop mounts")
}

#[test]
fn touch_or_narrow_device_registers_nothing() {
    let mut host = FakeHost {
        root_cursor: "auto".into(),
        ..FakeHost::default()
    };
    let env = Environment {
        fine_pointer_desktop: false,
        ..desktop()
    };
    let proxy = CursorProxy::mount(&env, CursorConfig::default(), &mut host).unwrap();
    assert!(proxy.is_none());
    assert_eq!(host.registered_total, 0);
    assert_eq!(host.root_cursor, "auto");
}

#[test]
fn mount_hides_cursor_and_unmount_restores_prior_value() {
    let mut host = FakeHost {
        root_cursor: "crosshair".into(),
        ..FakeHost::default()
    };
    let proxy = mounted(&mut host);
    assert_eq!(host.root_cursor, "none");
    assert_eq!(host.listening.len(), 4);

    proxy.unmount(&mut host);
    assert_eq!(host.root_cursor, "crosshair");
    assert!(host.listening.is_empty());
}

#[test]
fn invalid_config_is_reported() {
    let mut host = FakeHost::default();
    let cfg = CursorConfig {
        ripple_cap: 0,
        ..CursorConfig::default()
    };
    assert!(CursorProxy::mount(&desktop(), cfg, &mut host).is_err());
    assert_eq!(host.registered_total, 0);
}

#[test]
fn ripples_are_throttled_to_one_per_interval() {
    let mut host = FakeHost::default();
    let mut proxy = mounted(&mut host);
    let mut spawned = Vec::new();
    let mut last_id = 0;
    for i in 0..100 {
        let now = i as f64 * 10.0;
        proxy.pointer_move(Vec2::new(i as f32, 0.0), now);
        if let Some(r) = proxy.ripples().live(now).last() {
            if r.id != last_id {
                last_id = r.id;
                spawned.push(r.spawned_ms);
            }
        }
    }
    assert!(spawned.len() >= 10);
    for pair in spawned.windows(2) {
        assert!(pair[1] - pair[0] >= 80.0, "{:?}", spawned);
    }
}

#[test]
fn live_ripples_never_exceed_cap() {
    let cfg = CursorConfig {
        ripple_interval_ms: 0.0,
        ..CursorConfig::default()
    };
    let mut trail = cursor::RippleTrail::new(&cfg);
    for i in 0..50 {
        trail.on_move(Vec2::ZERO, i as f64);
        assert!(trail.len() <= cfg.ripple_cap);
    }
    // oldest dropped first
    let ids: Vec<u64> = trail.live(50.0).map(|r| r.id).collect();
    assert_eq!(ids, vec![45, 46, 47, 48, 49, 50]);
}

#[test]
fn cap_is_configurable() {
    let cfg = CursorConfig {
        ripple_interval_ms: 0.0,
        ripple_cap: 2,
        ..CursorConfig::default()
    };
    let mut trail = cursor::RippleTrail::new(&cfg);
    for i in 0..10 {
        trail.on_move(Vec2::ZERO, i as f64);
    }
    assert_eq!(trail.len(), 2);
}

#[test]
fn ripple_expires_after_lifetime() {
    let mut host = FakeHost::default();
    let mut proxy = mounted(&mut host);
    proxy.pointer_move(Vec2::new(10.0, 10.0), 1000.0);
    assert_eq!(proxy.ripples().live(1000.0).count(), 1);
    assert_eq!(proxy.ripples().live(1599.0).count(), 1);
    // more movement, but throttled away from spawning until 1080
    proxy.pointer_move(Vec2::new(11.0, 10.0), 1050.0);
    proxy.step(1601.0);
    assert!(proxy.ripples().live(1601.0).all(|r| r.spawned_ms != 1000.0));
    assert!(proxy.ripples().is_empty());
}

#[test]
fn expiry_holds_without_further_steps() {
    let mut trail = cursor::RippleTrail::new(&CursorConfig::default());
    trail.on_move(Vec2::ZERO, 0.0);
    assert_eq!(trail.live(601.0).count(), 0);
}

#[test]
fn pressed_shrinks_indicator() {
    let mut host = FakeHost::default();
    let mut proxy = mounted(&mut host);
    proxy.pointer_over(&[TargetDescriptor::new("a")]);
    assert_eq!(proxy.indicator().size, 48.0);
    proxy.pointer_down();
    assert!((proxy.indicator().size - 38.4).abs() < 1e-4);
    assert!((proxy.indicator().ring_size - 54.4).abs() < 1e-4);
    proxy.pointer_up();
    assert_eq!(proxy.indicator().size, 48.0);
}

#[test]
fn text_hover_switches_blend_mode() {
    let mut host = FakeHost::default();
    let mut proxy = mounted(&mut host);
    proxy.pointer_over(&[TargetDescriptor::new("span"), TargetDescriptor::new("p")]);
    assert_eq!(proxy.hover(), HoverKind::Text);
    assert_eq!(proxy.indicator().blend, BlendMode::Difference);
    assert_eq!(proxy.indicator().size, 60.0);
}

struct AlwaysLink;

impl HoverClassifier for AlwaysLink {
    fn classify(&self, _: &[TargetDescriptor]) -> HoverKind {
        HoverKind::Link
    }
}

#[test]
fn classifier_is_pluggable() {
    let mut host = FakeHost::default();
    let mut proxy = CursorProxy::mount_with(&desktop(), CursorConfig::default(), AlwaysLink, &mut host)
        .unwrap()
        .unwrap();
    proxy.pointer_over(&[TargetDescriptor::new("div")]);
    assert_eq!(proxy.hover(), HoverKind::Link);
}

#[test]
fn springs_follow_pointer() {
    let mut host = FakeHost::default();
    let mut proxy = mounted(&mut host);
    proxy.pointer_move(Vec2::new(100.0, 100.0), 0.0);
    assert_eq!(proxy.indicator().center, Vec2::new(100.0, 100.0));
    proxy.pointer_move(Vec2::new(400.0, 300.0), 10.0);
    proxy.step(0.0);
    for i in 1..=120 {
        proxy.step(i as f64 * 16.0);
    }
    let style = proxy.indicator();
    assert!(style.center.distance(Vec2::new(400.0, 300.0)) < 1.0);
    assert!(style.ring_center.distance(Vec2::new(400.0, 300.0)) < 1.0);
}

#[test]
fn nothing_drawn_before_first_pointer_event() {
    let mut host = FakeHost::default();
    let mut proxy = mounted(&mut host);
    let mut canvas = RecordingCanvas::new();
    proxy.draw(&mut canvas, 0.0);
    assert_eq!(canvas.circles(), 0);

    proxy.pointer_move(Vec2::new(50.0, 50.0), 5.0);
    canvas.reset();
    proxy.draw(&mut canvas, 16.0);
    assert_eq!(canvas.circles(), 1);
}

#[test]
fn cursor_surface_clears_whole_viewport_from_first_frame() {
    let mut host = FakeHost::default();
    let proxy = mounted(&mut host);
    let vp = Viewport::new(1920.0, 1080.0, 2.0).unwrap();
    let mut surface = AnimatedSurface::new(proxy, vp, MotionMode::Animated, StepScheduler::default());
    let mut canvas = RecordingCanvas::new();
    surface.start(Some(&mut canvas), 0.0);
    surface.effect_mut().pointer_move(Vec2::new(400.0, 300.0), 10.0);
    surface.frame(&mut canvas, 16.0);
    surface.frame(&mut canvas, 32.0);
    let clears = canvas.clears();
    assert_eq!(clears.len(), 3);
    assert!(clears.iter().all(|&c| c == (1920.0, 1080.0)));
    assert!(canvas.circles() > 0);
}

#[test]
fn host_release_without_proxy_restores_prior_cursor() {
    let mut host = FakeHost {
        root_cursor: "progress".into(),
        ..FakeHost::default()
    };
    let proxy = mounted(&mut host);
    let prior = proxy.prior_root_cursor().to_owned();
    assert_eq!(prior, "progress");
    // proxy lost (e.g. still borrowed elsewhere at teardown)
    drop(proxy);
    host.release(&prior);
    assert_eq!(host.root_cursor, "progress");
    assert!(host.listening.is_empty());
}
