//! Colors and palettes.
//!
//! Colors are kept as 8-bit RGB plus a float alpha, which is what the canvas
//! `rgba(...)` style strings want.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string, e.g. `rgba(249,115,22,0.150)`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Active light/dark theme, read once when an effect mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

pub const PRIMARY_ORANGE: Rgba = Rgba::rgb(249, 115, 22);
pub const AMBER: Rgba = Rgba::rgb(245, 158, 11);
pub const ROSE: Rgba = Rgba::rgb(239, 68, 68);

pub const PARTICLES_DARK: [Rgba; 4] = [
    PRIMARY_ORANGE,
    Rgba::rgb(251, 146, 60),
    AMBER,
    Rgba::rgb(253, 186, 116),
];

// Darker tints so the field still reads on a light page
pub const PARTICLES_LIGHT: [Rgba; 4] = [
    Rgba::rgb(234, 88, 12),
    Rgba::rgb(194, 65, 12),
    Rgba::rgb(217, 119, 6),
    Rgba::rgb(180, 83, 9),
];

pub const AURORA_PALETTE: [Rgba; 3] = [PRIMARY_ORANGE, AMBER, ROSE];

#[inline]
pub fn particle_palette(theme: Theme) -> &'static [Rgba] {
    match theme {
        Theme::Dark => &PARTICLES_DARK,
        Theme::Light => &PARTICLES_LIGHT,
    }
}

#[inline]
pub fn line_color(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => PRIMARY_ORANGE,
        Theme::Light => Rgba::rgb(194, 65, 12),
    }
}
