//! Cursor proxy: a spring-smoothed dot and ring that replace the system
//! pointer on fine-pointer desktops, leaving a throttled trail of ripples.

use crate::canvas::{BlendMode, Canvas2d};
use crate::color::{Rgba, PRIMARY_ORANGE};
use crate::config::{CursorConfig, Environment};
use crate::constants::*;
use crate::error::Result;
use crate::spring::SpringFollower;
use crate::surface::{Effect, Viewport};
use glam::Vec2;
use smallvec::SmallVec;

// Where the springs rest before the first pointer event
const PARKED: Vec2 = Vec2::new(-100.0, -100.0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverKind {
    #[default]
    Default,
    Link,
    Control,
    Text,
}

impl HoverKind {
    /// Diameter of the main dot in css px.
    pub fn size(self) -> f32 {
        match self {
            HoverKind::Default => 12.0,
            HoverKind::Link => 48.0,
            HoverKind::Control => 36.0,
            HoverKind::Text => 60.0,
        }
    }

    pub fn blend(self) -> BlendMode {
        match self {
            HoverKind::Text => BlendMode::Difference,
            _ => BlendMode::Normal,
        }
    }

    pub fn fill(self) -> Rgba {
        let a = match self {
            HoverKind::Default => 0.5,
            HoverKind::Text => 0.08,
            HoverKind::Link | HoverKind::Control => 0.15,
        };
        PRIMARY_ORANGE.with_alpha(a)
    }
}

/// One element on the path from the hovered node up to the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Lowercase tag name.
    pub tag: String,
    pub role: Option<String>,
}

impl TargetDescriptor {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }
}

pub trait HoverClassifier {
    /// `ancestry[0]` is the event target, followed by its ancestors.
    fn classify(&self, ancestry: &[TargetDescriptor]) -> HoverKind;
}

/// Nearest interactive ancestor wins; otherwise any text block; otherwise
/// default.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagClassifier;

const CONTROL_TAGS: [&str; 6] = ["button", "input", "textarea", "select", "label", "a"];
const TEXT_TAGS: [&str; 5] = ["h1", "h2", "h3", "h4", "p"];

impl HoverClassifier for TagClassifier {
    fn classify(&self, ancestry: &[TargetDescriptor]) -> HoverKind {
        let interactive = ancestry.iter().find(|d| {
            CONTROL_TAGS.contains(&d.tag.as_str()) || d.role.as_deref() == Some("button")
        });
        if let Some(d) = interactive {
            return if d.tag == "a" {
                HoverKind::Link
            } else {
                HoverKind::Control
            };
        }
        if ancestry.iter().any(|d| TEXT_TAGS.contains(&d.tag.as_str())) {
            return HoverKind::Text;
        }
        HoverKind::Default
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub pos: Vec2,
    pub spawned_ms: f64,
}

impl Ripple {
    /// 0 at spawn, 1 at end of life.
    #[inline]
    pub fn progress(&self, now_ms: f64, lifetime_ms: f64) -> f32 {
        ((now_ms - self.spawned_ms) / lifetime_ms).clamp(0.0, 1.0) as f32
    }
}

/// Throttled, capped, self-expiring ripple buffer.
#[derive(Clone, Debug)]
pub struct RippleTrail {
    ripples: SmallVec<[Ripple; RIPPLE_CAP]>,
    next_id: u64,
    last_spawn_ms: Option<f64>,
    interval_ms: f64,
    lifetime_ms: f64,
    cap: usize,
}

impl RippleTrail {
    pub fn new(config: &CursorConfig) -> Self {
        Self {
            ripples: SmallVec::new(),
            next_id: 0,
            last_spawn_ms: None,
            interval_ms: config.ripple_interval_ms,
            lifetime_ms: config.ripple_lifetime_ms,
            cap: config.ripple_cap.max(1),
        }
    }

    /// Record pointer movement; returns the id of a newly spawned ripple.
    pub fn on_move(&mut self, pos: Vec2, now_ms: f64) -> Option<u64> {
        self.expire(now_ms);
        if let Some(last) = self.last_spawn_ms {
            if now_ms - last < self.interval_ms {
                return None;
            }
        }
        self.last_spawn_ms = Some(now_ms);
        self.next_id += 1;
        while self.ripples.len() >= self.cap {
            self.ripples.remove(0);
        }
        self.ripples.push(Ripple {
            id: self.next_id,
            pos,
            spawned_ms: now_ms,
        });
        Some(self.next_id)
    }

    pub fn expire(&mut self, now_ms: f64) {
        let lifetime = self.lifetime_ms;
        self.ripples.retain(|r| now_ms - r.spawned_ms < lifetime);
    }

    /// Ripples still alive at `now_ms`, oldest first.
    pub fn live(&self, now_ms: f64) -> impl Iterator<Item = &Ripple> + '_ {
        let lifetime = self.lifetime_ms;
        self.ripples
            .iter()
            .filter(move |r| now_ms - r.spawned_ms < lifetime)
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn lifetime_ms(&self) -> f64 {
        self.lifetime_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorEvent {
    Move,
    Over,
    Down,
    Up,
}

impl CursorEvent {
    pub const ALL: [CursorEvent; 4] = [
        CursorEvent::Move,
        CursorEvent::Over,
        CursorEvent::Down,
        CursorEvent::Up,
    ];

    pub fn dom_name(self) -> &'static str {
        match self {
            CursorEvent::Move => "mousemove",
            CursorEvent::Over => "mouseover",
            CursorEvent::Down => "mousedown",
            CursorEvent::Up => "mouseup",
        }
    }
}

/// What the proxy needs from the page: listeners and the root cursor style.
pub trait CursorHost {
    fn listen(&mut self, event: CursorEvent);
    fn unlisten(&mut self, event: CursorEvent);
    /// Set the document root cursor style, returning the previous value.
    fn replace_root_cursor(&mut self, value: &str) -> String;

    /// Drop every proxy listener and put `prior_root_cursor` back.
    fn release(&mut self, prior_root_cursor: &str) {
        for ev in CursorEvent::ALL {
            self.unlisten(ev);
        }
        self.replace_root_cursor(prior_root_cursor);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    pub center: Vec2,
    pub size: f32,
    pub ring_center: Vec2,
    pub ring_size: f32,
    pub blend: BlendMode,
    pub fill: Rgba,
}

pub struct CursorProxy<C: HoverClassifier = TagClassifier> {
    config: CursorConfig,
    classifier: C,
    main: SpringFollower,
    trail: SpringFollower,
    ripples: RippleTrail,
    hover: HoverKind,
    pressed: bool,
    seen_pointer: bool,
    last_frame_ms: Option<f64>,
    prior_root_cursor: String,
    size: Vec2,
}

impl CursorProxy<TagClassifier> {
    pub fn mount(env: &Environment, config: CursorConfig, host: &mut dyn CursorHost) -> Result<Option<Self>> {
        Self::mount_with(env, config, TagClassifier, host)
    }
}

impl<C: HoverClassifier> CursorProxy<C> {
    /// Take over the pointer if the device qualifies. On touch or narrow
    /// devices nothing is registered and `None` is returned.
    pub fn mount_with(
        env: &Environment,
        config: CursorConfig,
        classifier: C,
        host: &mut dyn CursorHost,
    ) -> Result<Option<Self>> {
        if !env.cursor_enabled() {
            log::info!("[cursor] coarse pointer or narrow viewport; proxy disabled");
            return Ok(None);
        }
        config.validate()?;
        let prior_root_cursor = host.replace_root_cursor("none");
        for ev in CursorEvent::ALL {
            host.listen(ev);
        }
        let start = PARKED;
        Ok(Some(Self {
            main: SpringFollower::new(config.main_spring, start),
            trail: SpringFollower::new(config.trail_spring, start),
            ripples: RippleTrail::new(&config),
            config,
            classifier,
            hover: HoverKind::Default,
            pressed: false,
            seen_pointer: false,
            last_frame_ms: None,
            prior_root_cursor,
            size: Vec2::ZERO,
        }))
    }

    /// Remove every listener and give the page its cursor back.
    pub fn unmount(self, host: &mut dyn CursorHost) {
        host.release(&self.prior_root_cursor);
    }

    /// Root cursor value in place before the proxy took over.
    #[inline]
    pub fn prior_root_cursor(&self) -> &str {
        &self.prior_root_cursor
    }

    pub fn pointer_move(&mut self, pos: Vec2, now_ms: f64) {
        if !self.seen_pointer {
            // first sighting: appear under the pointer instead of flying in
            self.main.snap_to(pos);
            self.trail.snap_to(pos);
            self.seen_pointer = true;
        }
        self.main.set_target(pos);
        self.trail.set_target(pos);
        self.ripples.on_move(pos, now_ms);
    }

    pub fn pointer_over(&mut self, ancestry: &[TargetDescriptor]) {
        self.hover = self.classifier.classify(ancestry);
    }

    pub fn pointer_down(&mut self) {
        self.pressed = true;
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    pub fn step(&mut self, now_ms: f64) {
        let dt = match self.last_frame_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        self.main.step(dt);
        self.trail.step(dt);
        self.ripples.expire(now_ms);
    }

    pub fn indicator(&self) -> IndicatorStyle {
        let mut size = self.hover.size();
        if self.pressed {
            size *= self.config.pressed_scale;
        }
        IndicatorStyle {
            center: self.main.position(),
            size,
            ring_center: self.trail.position(),
            ring_size: size + TRAIL_RING_PADDING,
            blend: self.hover.blend(),
            fill: self.hover.fill(),
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas2d, now_ms: f64) {
        canvas.clear(self.size.x, self.size.y);
        if !self.seen_pointer {
            return;
        }
        let lifetime = self.ripples.lifetime_ms();
        canvas.set_blend(BlendMode::Normal);
        for r in self.ripples.live(now_ms) {
            let t = r.progress(now_ms, lifetime);
            let eased = 1.0 - (1.0 - t) * (1.0 - t);
            let diameter = RIPPLE_START_DIAMETER + (RIPPLE_END_DIAMETER - RIPPLE_START_DIAMETER) * eased;
            let alpha = RIPPLE_START_ALPHA * (1.0 - eased);
            canvas.stroke_circle(r.pos, diameter * 0.5, 1.0, PRIMARY_ORANGE.with_alpha(alpha));
        }
        let style = self.indicator();
        canvas.stroke_circle(style.ring_center, style.ring_size * 0.5, 1.0, PRIMARY_ORANGE.with_alpha(0.2));
        canvas.set_blend(style.blend);
        canvas.fill_circle(style.center, style.size * 0.5, style.fill);
        if self.hover == HoverKind::Text {
            canvas.stroke_circle(style.center, style.size * 0.5, 1.0, PRIMARY_ORANGE.with_alpha(0.3));
        }
        canvas.set_blend(BlendMode::Normal);
    }

    #[inline]
    pub fn hover(&self) -> HoverKind {
        self.hover
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn ripples(&self) -> &RippleTrail {
        &self.ripples
    }
}

impl<C: HoverClassifier> Effect for CursorProxy<C> {
    fn resize(&mut self, viewport: &Viewport) {
        let (w, h) = viewport.css_size();
        self.size = Vec2::new(w, h);
    }

    fn draw(&mut self, canvas: &mut dyn Canvas2d, now_ms: f64) {
        self.step(now_ms);
        self.render(canvas, now_ms);
    }

    fn redraw(&mut self, canvas: &mut dyn Canvas2d, now_ms: f64) {
        self.render(canvas, now_ms);
    }
}
