use crate::constants::POINTER_OFFSCREEN;
use glam::Vec2;

/// Last known pointer or primary-touch position for one effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pos: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Self::OFFSCREEN,
        }
    }
}

impl PointerState {
    pub const OFFSCREEN: Vec2 = Vec2::new(POINTER_OFFSCREEN, POINTER_OFFSCREEN);

    #[inline]
    pub fn move_to(&mut self, pos: Vec2) {
        if pos.is_finite() {
            self.pos = pos;
        }
    }

    /// Touch ended: park the pointer far away so it stops repelling.
    #[inline]
    pub fn release(&mut self) {
        self.pos = Self::OFFSCREEN;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.pos != Self::OFFSCREEN
    }
}
