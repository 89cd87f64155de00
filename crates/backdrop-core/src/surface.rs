//! Animated surface: the plumbing every effect shares.
//!
//! An [`AnimatedSurface`] owns the DPR-aware viewport, decides once between
//! a single static draw and a continuously re-armed frame loop, and hands
//! each frame to its [`Effect`]. Frame requests go through a
//! [`FrameScheduler`] so tests can single-step without a real frame clock.

use crate::canvas::Canvas2d;
use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::error::{BackdropError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    css_width: f64,
    css_height: f64,
    dpr: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Result<Self> {
        if !(css_width.is_finite() && css_height.is_finite())
            || css_width < 0.0
            || css_height < 0.0
        {
            return Err(BackdropError::InvalidViewport {
                width: css_width,
                height: css_height,
                dpr: device_pixel_ratio,
            });
        }
        // Unknown or bogus ratios fall back to 1
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
        } else {
            1.0
        };
        Ok(Self {
            css_width,
            css_height,
            dpr,
        })
    }

    #[inline]
    pub fn css_size(&self) -> (f32, f32) {
        (self.css_width as f32, self.css_height as f32)
    }

    #[inline]
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// Backing buffer size in device pixels, never smaller than 1x1.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.dpr).round() as u32;
        let h = (self.css_height * self.dpr).round() as u32;
        (w.max(1), h.max(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMode {
    Static,
    Animated,
}

impl MotionMode {
    #[inline]
    pub fn from_reduced_motion(reduced: bool) -> Self {
        if reduced {
            MotionMode::Static
        } else {
            MotionMode::Animated
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameId(pub i32);

/// Source of "call me on the next frame" requests.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// No drawing surface; nothing drawn, nothing scheduled.
    Unavailable,
    /// Drawn once, never scheduled.
    Static,
    Running,
    Stopped,
}

/// Cancellable self re-arming frame loop.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    mode: MotionMode,
    pending: Option<FrameId>,
    state: LoopState,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(mode: MotionMode, scheduler: S) -> Self {
        Self {
            scheduler,
            mode,
            pending: None,
            state: LoopState::Stopped,
            frames: 0,
        }
    }

    pub fn start(&mut self) -> LoopState {
        self.state = match self.mode {
            MotionMode::Static => LoopState::Static,
            MotionMode::Animated => {
                self.pending = self.scheduler.request_frame();
                LoopState::Running
            }
        };
        self.state
    }

    /// A requested frame fired. Returns false when the loop is no longer
    /// running and the caller must not draw.
    pub fn advance(&mut self) -> bool {
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }
        self.frames += 1;
        self.pending = self.scheduler.request_frame();
        true
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        if self.state == LoopState::Running {
            self.state = LoopState::Stopped;
        }
    }

    pub fn mark_unavailable(&mut self) {
        self.state = LoopState::Unavailable;
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }
}

/// One animated visual; supplies only its per-frame drawing.
pub trait Effect {
    fn resize(&mut self, viewport: &Viewport);
    /// Advance one frame and paint it.
    fn draw(&mut self, canvas: &mut dyn Canvas2d, now_ms: f64);
    /// Paint the current state without advancing it.
    fn redraw(&mut self, canvas: &mut dyn Canvas2d, now_ms: f64);
}

pub struct AnimatedSurface<E: Effect, S: FrameScheduler> {
    effect: E,
    viewport: Viewport,
    frames: FrameLoop<S>,
}

impl<E: Effect, S: FrameScheduler> AnimatedSurface<E, S> {
    pub fn new(effect: E, viewport: Viewport, mode: MotionMode, scheduler: S) -> Self {
        Self {
            effect,
            viewport,
            frames: FrameLoop::new(mode, scheduler),
        }
    }

    /// Draw the first frame and, unless motion is reduced, arm the loop.
    pub fn start(&mut self, canvas: Option<&mut dyn Canvas2d>, now_ms: f64) -> LoopState {
        let Some(canvas) = canvas else {
            self.frames.mark_unavailable();
            return LoopState::Unavailable;
        };
        // effects only learn their size from the viewport
        self.effect.resize(&self.viewport);
        canvas.set_scale(self.viewport.dpr());
        self.effect.draw(canvas, now_ms);
        self.frames.start()
    }

    /// Called from the scheduled frame callback.
    pub fn frame(&mut self, canvas: &mut dyn Canvas2d, now_ms: f64) {
        if self.frames.advance() {
            self.effect.draw(canvas, now_ms);
        }
    }

    /// Apply a new viewport. Returns the backing size the caller must give
    /// the real canvas before the next draw.
    pub fn resize(&mut self, viewport: Viewport, canvas: &mut dyn Canvas2d, now_ms: f64) -> (u32, u32) {
        self.viewport = viewport;
        self.effect.resize(&viewport);
        // resetting the buffer size also resets the transform
        canvas.set_scale(viewport.dpr());
        if self.frames.state() == LoopState::Static {
            self.effect.redraw(canvas, now_ms);
        }
        viewport.backing_size()
    }

    pub fn stop(&mut self) {
        self.frames.stop();
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.frames.state()
    }

    #[inline]
    pub fn frame_loop(&self) -> &FrameLoop<S> {
        &self.frames
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    /// Stop the loop and hand back the effect, e.g. for teardown.
    pub fn into_effect(mut self) -> E {
        self.frames.stop();
        self.effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dpr_is_capped_at_two() {
        let vp = Viewport::new(100.0, 50.0, 3.0).unwrap();
        assert_eq!(vp.dpr(), 2.0);
        assert_eq!(vp.backing_size(), (200, 100));
    }

    #[test]
    fn bogus_dpr_falls_back_to_one() {
        assert_eq!(Viewport::new(10.0, 10.0, 0.0).unwrap().dpr(), 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).unwrap().dpr(), 1.0);
    }

    #[test]
    fn empty_viewport_still_has_a_pixel() {
        assert_eq!(Viewport::new(0.0, 0.0, 1.0).unwrap().backing_size(), (1, 1));
    }

    #[test]
    fn negative_viewport_is_rejected() {
        assert!(Viewport::new(-1.0, 10.0, 1.0).is_err());
        assert!(Viewport::new(f64::INFINITY, 10.0, 1.0).is_err());
    }
}
