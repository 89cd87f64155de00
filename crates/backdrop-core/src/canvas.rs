//! Drawing surface abstraction.
//!
//! Effects never touch a platform canvas directly; they draw through
//! [`Canvas2d`]. The web front end implements it over
//! `CanvasRenderingContext2d`, tests use [`RecordingCanvas`].

use crate::color::Rgba;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Difference,
}

impl BlendMode {
    /// Value for `globalCompositeOperation`.
    pub fn composite_op(self) -> &'static str {
        match self {
            BlendMode::Normal => "source-over",
            BlendMode::Difference => "difference",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Two-circle radial gradient, same shape as `createRadialGradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    pub stops: SmallVec<[ColorStop; 3]>,
}

pub trait Canvas2d {
    /// Map css pixels onto the backing buffer. Absolute, not cumulative.
    fn set_scale(&mut self, scale: f64);
    fn clear(&mut self, width: f32, height: f32);
    fn set_blend(&mut self, mode: BlendMode);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Rgba);
    /// Fill the rect (0, 0, width, height) with the gradient.
    fn fill_radial(&mut self, gradient: &RadialGradient, width: f32, height: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetScale(f64),
    Clear { width: f32, height: f32 },
    SetBlend(BlendMode),
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    StrokeCircle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
    Radial(RadialGradient),
}

/// Headless canvas that keeps every command it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn circles(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }

    /// Sizes of every `clear` call, in order.
    pub fn clears(&self) -> Vec<(f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Clear { width, height } => Some((*width, *height)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn gradients(&self) -> Vec<&RadialGradient> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Radial(g) => Some(g),
                _ => None,
            })
            .collect()
    }
}

impl Canvas2d for RecordingCanvas {
    fn set_scale(&mut self, scale: f64) {
        self.commands.push(DrawCommand::SetScale(scale));
    }
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }
    fn set_blend(&mut self, mode: BlendMode) {
        self.commands.push(DrawCommand::SetBlend(mode));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
    fn stroke_circle(&mut self, center: Vec2, radius: f32, _line_width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, _line_width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
    fn fill_radial(&mut self, gradient: &RadialGradient, _width: f32, _height: f32) {
        self.commands.push(DrawCommand::Radial(gradient.clone()));
    }
}
