// Host-side tests for the particle field simulation.

use backdrop_core::constants::{POINTER_OFFSCREEN, WRAP_MARGIN};
use backdrop_core::*;
use glam::Vec2;

fn offscreen() -> Vec2 {
    Vec2::splat(POINTER_OFFSCREEN)
}

fn field(w: f32, h: f32, seed: u64) -> ParticleField {
    ParticleField::with_seed(w, h, FieldConfig::for_viewport_width(w), Theme::Dark, seed)
        .expect("valid config")
}

#[test]
fn desktop_scenario_matches_device_class() {
    let f = field(1920.0, 1080.0, 7);
    assert_eq!(f.particles().len(), 80);
    assert_eq!(f.config().repulsion_radius, 150.0);
    assert_eq!(f.config().line_distance, 120.0);
}

#[test]
fn mobile_scenario_matches_device_class() {
    let f = field(375.0, 800.0, 7);
    assert_eq!(f.particles().len(), 35);
    assert_eq!(f.config().line_distance, 80.0);
    assert!(f.config().repulsion_radius < 150.0);
}

#[test]
fn particles_start_at_home_inside_viewport() {
    let f = field(640.0, 480.0, 3);
    for p in f.particles() {
        assert_eq!(p.pos, p.home);
        assert!((0.0..=640.0).contains(&p.home.x));
        assert!((0.0..=480.0).contains(&p.home.y));
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
        assert!((1.0..3.0).contains(&p.radius));
    }
}

#[test]
fn positions_stay_wrapped_under_sweeping_pointer() {
    let (w, h) = (800.0, 600.0);
    let mut f = field(w, h, 11);
    for tick in 0..3000 {
        let t = tick as f32 * 0.05;
        let pointer = Vec2::new(w * 0.5 + t.cos() * 300.0, h * 0.5 + (t * 1.3).sin() * 250.0);
        f.step(pointer);
        for p in f.particles() {
            assert!(p.pos.x >= -WRAP_MARGIN && p.pos.x <= w + WRAP_MARGIN, "x={}", p.pos.x);
            assert!(p.pos.y >= -WRAP_MARGIN && p.pos.y <= h + WRAP_MARGIN, "y={}", p.pos.y);
        }
    }
}

#[test]
fn fast_particle_wraps_and_home_migrates() {
    let mut f = field(200.0, 200.0, 5);
    {
        let p = &mut f.particles_mut()[0];
        p.pos = Vec2::new(195.0, 100.0);
        p.home = p.pos;
        p.vel = Vec2::new(40.0, 0.0);
    }
    f.step(offscreen());
    let p = &f.particles()[0];
    assert_eq!(p.pos.x, -WRAP_MARGIN);
    assert_eq!(p.home.x, -WRAP_MARGIN);
}

#[test]
fn velocity_decays_with_pointer_offscreen() {
    let mut f = field(1000.0, 1000.0, 9);
    {
        let p = &mut f.particles_mut()[0];
        p.pos = Vec2::new(500.0, 500.0);
        p.home = p.pos;
        p.vel = Vec2::new(3.0, -2.0);
    }
    let start = f.particles()[0].vel.length();
    // peak speed per 50-tick window; the window spans more than half an
    // oscillation so the peak is always inside it
    let mut peaks = Vec::new();
    for _ in 0..8 {
        let mut peak = 0.0_f32;
        for _ in 0..50 {
            f.step(offscreen());
            peak = peak.max(f.particles()[0].vel.length());
        }
        peaks.push(peak);
    }
    assert!(peaks[0] < start);
    for pair in peaks.windows(2) {
        assert!(pair[1] < pair[0], "{:?}", peaks);
    }
    assert!(*peaks.last().unwrap() < 0.01);
}

#[test]
fn whole_field_settles_without_pointer() {
    let mut f = field(1280.0, 720.0, 21);
    let initial_max = f
        .particles()
        .iter()
        .map(|p| p.vel.length())
        .fold(0.0_f32, f32::max);
    for _ in 0..400 {
        f.step(offscreen());
    }
    for p in f.particles() {
        assert!(p.vel.length() < initial_max * 0.1);
    }
}

#[test]
fn pointer_pushes_nearby_particle_away() {
    let mut f = field(1000.0, 1000.0, 2);
    {
        let p = &mut f.particles_mut()[0];
        p.pos = Vec2::new(500.0, 500.0);
        p.home = p.pos;
        p.vel = Vec2::ZERO;
    }
    f.step(Vec2::new(450.0, 500.0));
    let p = &f.particles()[0];
    assert!(p.vel.x > 0.0);
    assert!(p.vel.y.abs() < 1e-6);
    assert!(p.pos.x > 500.0);
}

#[test]
fn pointer_outside_radius_has_no_effect() {
    let mut f = field(1000.0, 1000.0, 2);
    {
        let p = &mut f.particles_mut()[0];
        p.pos = Vec2::new(500.0, 500.0);
        p.home = p.pos;
        p.vel = Vec2::ZERO;
    }
    f.step(Vec2::new(500.0, 500.0 + 151.0));
    assert_eq!(f.particles()[0].vel, Vec2::ZERO);
}

#[test]
fn render_draws_every_particle_and_close_pairs() {
    let mut f = ParticleField::with_seed(
        100.0,
        100.0,
        FieldConfig {
            count: 3,
            ..FieldConfig::default()
        },
        Theme::Light,
        4,
    )
    .unwrap();
    let spots = [Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0), Vec2::new(90.0, 90.0)];
    for (p, at) in f.particles_mut().iter_mut().zip(spots) {
        p.pos = at;
    }
    let mut canvas = RecordingCanvas::new();
    f.render(&mut canvas);
    assert_eq!(canvas.circles(), 3);
    // (10,10)-(20,10) and (10,10)-(90,90) = 113, (20,10)-(90,90) = 106: all under 120
    assert_eq!(canvas.lines(), 3);
}

#[test]
fn line_alpha_fades_with_distance() {
    let mut f = ParticleField::with_seed(
        400.0,
        400.0,
        FieldConfig {
            count: 2,
            ..FieldConfig::default()
        },
        Theme::Dark,
        4,
    )
    .unwrap();
    f.particles_mut()[0].pos = Vec2::new(0.0, 0.0);
    f.particles_mut()[1].pos = Vec2::new(60.0, 0.0);
    let mut canvas = RecordingCanvas::new();
    f.render(&mut canvas);
    let alpha = canvas
        .commands
        .iter()
        .find_map(|c| match c {
            canvas::DrawCommand::Line { color, .. } => Some(color.a),
            _ => None,
        })
        .expect("one line");
    assert!((alpha - 0.075).abs() < 1e-6);
}

#[test]
fn same_size_resize_keeps_particles() {
    let mut f = field(1024.0, 768.0, 8);
    f.step(Vec2::new(300.0, 300.0));
    let before = f.particles().to_vec();
    f.set_size(1024.0, 768.0, FieldConfig::for_viewport_width(1024.0)).unwrap();
    assert_eq!(f.particles(), &before[..]);
}

#[test]
fn resize_across_breakpoint_regenerates_for_new_class() {
    let mut f = field(1024.0, 768.0, 8);
    f.set_size(375.0, 800.0, FieldConfig::for_viewport_width(375.0)).unwrap();
    assert_eq!(f.particles().len(), 35);
    for p in f.particles() {
        assert!(p.home.x <= 375.0 && p.home.y <= 800.0);
    }
}

#[test]
fn colors_come_from_the_theme_palette() {
    let f = ParticleField::with_seed(500.0, 500.0, FieldConfig::default(), Theme::Light, 12).unwrap();
    let palette = color::particle_palette(Theme::Light);
    for p in f.particles() {
        assert!(palette
            .iter()
            .any(|c| c.r == p.color.r && c.g == p.color.g && c.b == p.color.b));
        assert!((0.2..0.7).contains(&p.color.a));
    }
}
