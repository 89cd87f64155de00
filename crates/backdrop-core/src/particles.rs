//! Particle field: a fixed set of points that drift around their home
//! positions, get pushed away by the pointer and are joined by faint lines
//! when close to each other.

use crate::canvas::Canvas2d;
use crate::color::{line_color, particle_palette, Rgba, Theme};
use crate::config::FieldConfig;
use crate::constants::*;
use crate::error::Result;
use crate::pointer::PointerState;
use crate::surface::{Effect, Viewport};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub home: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    config: FieldConfig,
    theme: Theme,
    size: Vec2,
    pointer: PointerState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, config: FieldConfig, theme: Theme, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let mut field = Self {
            particles: Vec::with_capacity(config.count),
            config,
            theme,
            size: Vec2::new(width.max(0.0), height.max(0.0)),
            pointer: PointerState::default(),
            rng,
        };
        field.regenerate();
        Ok(field)
    }

    pub fn with_seed(width: f32, height: f32, config: FieldConfig, theme: Theme, seed: u64) -> Result<Self> {
        Self::new(width, height, config, theme, StdRng::seed_from_u64(seed))
    }

    fn regenerate(&mut self) {
        let palette = particle_palette(self.theme);
        let size = self.size;
        let rng = &mut self.rng;
        self.particles.clear();
        self.particles.extend((0..self.config.count).map(|_| {
            let home = Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
            let vel = Vec2::new(
                rng.gen_range(-INITIAL_SPEED_RANGE..INITIAL_SPEED_RANGE),
                rng.gen_range(-INITIAL_SPEED_RANGE..INITIAL_SPEED_RANGE),
            );
            let color = palette[rng.gen_range(0..palette.len())]
                .with_alpha(rng.gen_range(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX));
            Particle {
                pos: home,
                home,
                vel,
                radius: rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
                color,
            }
        }));
        log::debug!(
            "[particles] regenerated n={} size={:.0}x{:.0}",
            self.particles.len(),
            size.x,
            size.y
        );
    }

    /// Replace the field for a new viewport size. A same-size call keeps the
    /// current particles.
    pub fn set_size(&mut self, width: f32, height: f32, config: FieldConfig) -> Result<()> {
        config.validate()?;
        let size = Vec2::new(width.max(0.0), height.max(0.0));
        if size == self.size && config == self.config {
            return Ok(());
        }
        self.size = size;
        self.config = config;
        self.regenerate();
        Ok(())
    }

    /// Advance one frame against the given pointer position.
    pub fn step(&mut self, pointer: Vec2) {
        let cfg = &self.config;
        let size = self.size;
        for p in &mut self.particles {
            let away = p.pos - pointer;
            let dist = away.length();
            if dist > 0.0 && dist < cfg.repulsion_radius {
                let force = (cfg.repulsion_radius - dist) / cfg.repulsion_radius;
                p.vel += away / dist * force * cfg.repulsion_strength;
            }
            p.vel += (p.home - p.pos) * cfg.spring;
            p.vel *= cfg.damping;
            p.pos += p.vel;
            wrap_axis(&mut p.pos.x, &mut p.home.x, size.x, cfg.wrap_margin);
            wrap_axis(&mut p.pos.y, &mut p.home.y, size.y, cfg.wrap_margin);
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas2d) {
        canvas.clear(self.size.x, self.size.y);
        for p in &self.particles {
            canvas.fill_circle(p.pos, p.radius, p.color);
        }
        let line_distance = self.config.line_distance;
        let stroke = line_color(self.theme);
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = a.pos.distance(b.pos);
                if dist < line_distance {
                    let alpha = (1.0 - dist / line_distance) * LINE_ALPHA_MAX;
                    canvas.stroke_line(a.pos, b.pos, LINE_WIDTH, stroke.with_alpha(alpha));
                }
            }
        }
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
}

// Leaving one edge re-enters at the other; home follows so the spring does
// not drag the particle back across the screen.
#[inline]
fn wrap_axis(pos: &mut f32, home: &mut f32, extent: f32, margin: f32) {
    if *pos < -margin {
        *pos = extent + margin;
        *home = *pos;
    } else if *pos > extent + margin {
        *pos = -margin;
        *home = *pos;
    }
}

impl Effect for ParticleField {
    fn resize(&mut self, viewport: &Viewport) {
        let (w, h) = viewport.css_size();
        let cfg = FieldConfig::for_viewport_width(w);
        if let Err(e) = self.set_size(w, h, cfg) {
            log::warn!("[particles] resize rejected: {}", e);
        }
    }

    fn draw(&mut self, canvas: &mut dyn Canvas2d, _now_ms: f64) {
        let pointer = self.pointer.position();
        self.step(pointer);
        self.render(canvas);
    }

    fn redraw(&mut self, canvas: &mut dyn Canvas2d, _now_ms: f64) {
        self.render(canvas);
    }
}
