//! Aurora wash: a few large, slowly orbiting radial gradients.
//!
//! The phase advances by a fixed step per drawn frame, not by wall time, so
//! the drift speed follows the display refresh rate.

use crate::canvas::{Canvas2d, ColorStop, RadialGradient};
use crate::color::{Rgba, AURORA_PALETTE, PRIMARY_ORANGE};
use crate::constants::{AURORA_AMBIENT_LAYERS, AURORA_PHASE_STEP};
use crate::surface::{Effect, Viewport};
use glam::Vec2;
use smallvec::smallvec;

#[derive(Clone, Debug, PartialEq)]
pub struct AuroraConfig {
    pub palette: Vec<Rgba>,
    pub accent: Rgba,
    pub phase_step: f32,
}

impl Default for AuroraConfig {
    fn default() -> Self {
        Self {
            palette: AURORA_PALETTE.to_vec(),
            accent: PRIMARY_ORANGE,
            phase_step: AURORA_PHASE_STEP,
        }
    }
}

pub struct Aurora {
    config: AuroraConfig,
    phase: f32,
    size: Vec2,
}

impl Aurora {
    pub fn new(width: f32, height: f32, config: AuroraConfig) -> Self {
        Self {
            config,
            phase: 0.0,
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn advance(&mut self) {
        self.phase += self.config.phase_step;
    }

    /// Gradients for the current phase, back to front: the ambient layers
    /// then the accent.
    pub fn layers(&self) -> Vec<RadialGradient> {
        let (w, h) = (self.size.x, self.size.y);
        let t = self.phase;
        let palette = &self.config.palette;
        let mut out = Vec::with_capacity(AURORA_AMBIENT_LAYERS + 1);
        if !palette.is_empty() {
            for i in 0..AURORA_AMBIENT_LAYERS {
                let fi = i as f32;
                let c1 = palette[i % palette.len()];
                let c2 = palette[(i + 1) % palette.len()];
                out.push(RadialGradient {
                    inner_center: Vec2::new(
                        w * (0.3 + (t + fi * 2.0).sin() * 0.3),
                        h * (0.3 + (t * 0.7 + fi * 1.5).cos() * 0.3),
                    ),
                    inner_radius: 0.0,
                    outer_center: Vec2::new(w * 0.5, h * 0.5),
                    outer_radius: w * 0.9,
                    stops: smallvec![
                        ColorStop { offset: 0.0, color: c1.with_alpha(0.15) },
                        ColorStop { offset: 0.5, color: c2.with_alpha(0.08) },
                        ColorStop { offset: 1.0, color: Rgba::TRANSPARENT },
                    ],
                });
            }
        }
        let accent = self.config.accent;
        out.push(RadialGradient {
            inner_center: Vec2::new(
                w * (0.7 + (t * 1.3).sin() * 0.2),
                h * (0.6 + (t * 0.9).cos() * 0.2),
            ),
            inner_radius: 0.0,
            outer_center: Vec2::new(w * 0.6, h * 0.6),
            outer_radius: w * 0.7,
            stops: smallvec![
                ColorStop { offset: 0.0, color: accent.with_alpha(0.12) },
                ColorStop { offset: 0.5, color: accent.with_alpha(0.05) },
                ColorStop { offset: 1.0, color: Rgba::TRANSPARENT },
            ],
        });
        out
    }

    pub fn render(&self, canvas: &mut dyn Canvas2d) {
        canvas.clear(self.size.x, self.size.y);
        for g in self.layers() {
            canvas.fill_radial(&g, self.size.x, self.size.y);
        }
    }
}

impl Effect for Aurora {
    fn resize(&mut self, viewport: &Viewport) {
        let (w, h) = viewport.css_size();
        self.size = Vec2::new(w, h);
    }

    fn draw(&mut self, canvas: &mut dyn Canvas2d, _now_ms: f64) {
        self.advance();
        self.render(canvas);
    }

    fn redraw(&mut self, canvas: &mut dyn Canvas2d, _now_ms: f64) {
        self.render(canvas);
    }
}
