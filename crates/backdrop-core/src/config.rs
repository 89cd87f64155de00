//! Per-effect configuration and the one-time environment snapshot taken at
//! mount.

use crate::color::Theme;
use crate::constants::*;
use crate::error::{BackdropError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    #[inline]
    pub fn for_width(css_width: f32) -> Self {
        if css_width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub repulsion_radius: f32,
    pub line_distance: f32,
    pub repulsion_strength: f32,
    pub spring: f32,
    pub damping: f32,
    pub wrap_margin: f32,
}

impl FieldConfig {
    pub fn for_device(class: DeviceClass) -> Self {
        let (count, repulsion_radius, line_distance) = match class {
            DeviceClass::Desktop => (
                DESKTOP_PARTICLE_COUNT,
                DESKTOP_REPULSION_RADIUS,
                DESKTOP_LINE_DISTANCE,
            ),
            DeviceClass::Mobile => (
                MOBILE_PARTICLE_COUNT,
                MOBILE_REPULSION_RADIUS,
                MOBILE_LINE_DISTANCE,
            ),
        };
        Self {
            count,
            repulsion_radius,
            line_distance,
            repulsion_strength: REPULSION_STRENGTH,
            spring: HOME_SPRING,
            damping: VELOCITY_DAMPING,
            wrap_margin: WRAP_MARGIN,
        }
    }

    #[inline]
    pub fn for_viewport_width(css_width: f32) -> Self {
        Self::for_device(DeviceClass::for_width(css_width))
    }

    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_PARTICLES {
            return Err(BackdropError::InvalidConfig("particle count above MAX_PARTICLES"));
        }
        if !(self.repulsion_radius > 0.0 && self.line_distance > 0.0) {
            return Err(BackdropError::InvalidConfig("radii must be positive"));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(BackdropError::InvalidConfig("damping must be in [0, 1)"));
        }
        if self.wrap_margin < 0.0 {
            return Err(BackdropError::InvalidConfig("wrap margin must be non-negative"));
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::for_device(DeviceClass::Desktop)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn from_array(v: [f32; 3]) -> Self {
        Self {
            stiffness: v[0],
            damping: v[1],
            mass: v[2],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub ripple_interval_ms: f64,
    pub ripple_lifetime_ms: f64,
    /// Live ripple cap; the oldest is dropped first.
    pub ripple_cap: usize,
    pub pressed_scale: f32,
    pub main_spring: SpringConfig,
    pub trail_spring: SpringConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            ripple_interval_ms: RIPPLE_INTERVAL_MS,
            ripple_lifetime_ms: RIPPLE_LIFETIME_MS,
            ripple_cap: RIPPLE_CAP,
            pressed_scale: PRESSED_SCALE,
            main_spring: SpringConfig::from_array(MAIN_SPRING),
            trail_spring: SpringConfig::from_array(TRAIL_SPRING),
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ripple_cap == 0 {
            return Err(BackdropError::InvalidConfig("ripple cap must be at least 1"));
        }
        if self.ripple_lifetime_ms <= 0.0 || self.ripple_interval_ms < 0.0 {
            return Err(BackdropError::InvalidConfig("ripple timings must be positive"));
        }
        for s in [self.main_spring, self.trail_spring] {
            if s.mass <= 0.0 || s.stiffness <= 0.0 || s.damping < 0.0 {
                return Err(BackdropError::InvalidConfig("spring parameters out of range"));
            }
        }
        Ok(())
    }
}

/// Everything read from the host once, at mount. Nothing here is
/// re-subscribed; a later OS preference change needs a remount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub reduced_motion: bool,
    /// `(pointer: fine) and (min-width: 768px)`
    pub fine_pointer_desktop: bool,
    pub theme: Theme,
}

impl Environment {
    #[inline]
    pub fn cursor_enabled(&self) -> bool {
        self.fine_pointer_desktop
    }
}
