use backdrop_core::canvas::{BlendMode, Canvas2d, RadialGradient};
use backdrop_core::Rgba;
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Canvas2d` over a browser 2D context.
pub struct WebCanvas {
    ctx: web::CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    #[inline]
    fn set_fill(&self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
    }

    #[inline]
    fn set_stroke(&self, color: Rgba, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width as f64);
    }
}

impl Canvas2d for WebCanvas {
    fn set_scale(&mut self, scale: f64) {
        // absolute, so repeated resizes never compound
        _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        _ = self.ctx.set_global_composite_operation(mode.composite_op());
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.set_fill(color);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.set_stroke(color, line_width);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.set_stroke(color, line_width);
        self.ctx.stroke();
    }

    fn fill_radial(&mut self, g: &RadialGradient, width: f32, height: f32) {
        let gradient = match self.ctx.create_radial_gradient(
            g.inner_center.x as f64,
            g.inner_center.y as f64,
            g.inner_radius.max(0.0) as f64,
            g.outer_center.x as f64,
            g.outer_center.y as f64,
            g.outer_radius.max(0.0) as f64,
        ) {
            Ok(gradient) => gradient,
            Err(e) => {
                log::warn!("[canvas] radial gradient rejected: {:?}", e);
                return;
            }
        };
        for stop in &g.stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }
}
