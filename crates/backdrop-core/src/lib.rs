//! Simulation state and per-frame math for the backdrop effects.
//!
//! Nothing in this crate touches a browser API. Effects draw through
//! [`canvas::Canvas2d`] and are driven by [`surface::AnimatedSurface`], so
//! the whole engine runs (and is tested) on the host.

pub mod aurora;
pub mod canvas;
pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod liquid;
pub mod particles;
pub mod pointer;
pub mod spring;
pub mod surface;

pub use aurora::{Aurora, AuroraConfig};
pub use canvas::{BlendMode, Canvas2d, RadialGradient, RecordingCanvas};
pub use color::{Rgba, Theme};
pub use config::{CursorConfig, DeviceClass, Environment, FieldConfig};
pub use cursor::{
    CursorEvent, CursorHost, CursorProxy, HoverClassifier, HoverKind, TagClassifier,
    TargetDescriptor,
};
pub use error::{BackdropError, Result};
pub use liquid::LiquidDistortion;
pub use particles::{Particle, ParticleField};
pub use pointer::PointerState;
pub use surface::{
    AnimatedSurface, Effect, FrameId, FrameLoop, FrameScheduler, LoopState, MotionMode, Viewport,
};
