//! DOM side of the cursor proxy.
//!
//! Listeners only queue input; the frame callback drains the queue into the
//! proxy before drawing, so every event that arrived before a frame is
//! applied to that frame.

use super::pointer::mouse_client_pos;
use super::Listener;
use crate::constants::ROOT_CURSOR_PROPERTY;
use crate::frame::Clock;
use backdrop_core::canvas::Canvas2d;
use backdrop_core::{CursorEvent, CursorHost, CursorProxy, Effect, TargetDescriptor, Viewport};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub enum CursorInput {
    Move { pos: Vec2, at_ms: f64 },
    Over(Vec<TargetDescriptor>),
    Down,
    Up,
}

pub type InputQueue = Rc<RefCell<Vec<CursorInput>>>;

/// Event target followed by its ancestors, as descriptors.
pub fn ancestry(ev: &web::Event) -> Vec<TargetDescriptor> {
    let mut out = Vec::new();
    let mut el = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok());
    while let Some(e) = el {
        let mut d = TargetDescriptor::new(&e.tag_name());
        d.role = e.get_attribute("role");
        out.push(d);
        el = e.parent_element();
    }
    out
}

pub struct DomCursorHost {
    window: web::Window,
    root: Option<web::HtmlElement>,
    queue: InputQueue,
    clock: Clock,
    listeners: Vec<(CursorEvent, Listener)>,
}

impl DomCursorHost {
    pub fn new(window: web::Window, root: Option<web::HtmlElement>, clock: Clock) -> Self {
        Self {
            window,
            root,
            queue: Rc::new(RefCell::new(Vec::new())),
            clock,
            listeners: Vec::new(),
        }
    }

    pub fn queue(&self) -> InputQueue {
        self.queue.clone()
    }
}

impl CursorHost for DomCursorHost {
    fn listen(&mut self, event: CursorEvent) {
        let queue = self.queue.clone();
        let clock = self.clock;
        let handler = move |ev: web::Event| {
            let input = match event {
                CursorEvent::Move => match mouse_client_pos(&ev) {
                    Some(pos) => CursorInput::Move {
                        pos,
                        at_ms: clock.now_ms(),
                    },
                    None => return,
                },
                CursorEvent::Over => CursorInput::Over(ancestry(&ev)),
                CursorEvent::Down => CursorInput::Down,
                CursorEvent::Up => CursorInput::Up,
            };
            queue.borrow_mut().push(input);
        };
        let listener = Listener::new(&self.window, event.dom_name(), handler);
        self.listeners.push((event, listener));
    }

    fn unlisten(&mut self, event: CursorEvent) {
        self.listeners.retain(|(e, _)| *e != event);
    }

    fn replace_root_cursor(&mut self, value: &str) -> String {
        let Some(root) = &self.root else {
            return String::new();
        };
        let style = root.style();
        let prior = style
            .get_property_value(ROOT_CURSOR_PROPERTY)
            .unwrap_or_default();
        if value.is_empty() {
            _ = style.remove_property(ROOT_CURSOR_PROPERTY);
        } else {
            _ = style.set_property(ROOT_CURSOR_PROPERTY, value);
        }
        prior
    }
}

/// Cursor proxy plus the queue its listeners write into.
pub struct CursorLayer {
    pub proxy: CursorProxy,
    queue: InputQueue,
}

impl CursorLayer {
    pub fn new(proxy: CursorProxy, queue: InputQueue) -> Self {
        Self { proxy, queue }
    }

    fn drain(&mut self) {
        for input in self.queue.borrow_mut().drain(..) {
            match input {
                CursorInput::Move { pos, at_ms } => self.proxy.pointer_move(pos, at_ms),
                CursorInput::Over(path) => self.proxy.pointer_over(&path),
                CursorInput::Down => self.proxy.pointer_down(),
                CursorInput::Up => self.proxy.pointer_up(),
            }
        }
    }
}

impl Effect for CursorLayer {
    fn resize(&mut self, viewport: &Viewport) {
        self.proxy.resize(viewport);
    }

    fn draw(&mut self, canvas: &mut dyn Canvas2d, now_ms: f64) {
        self.drain();
        self.proxy.draw(canvas, now_ms);
    }

    fn redraw(&mut self, canvas: &mut dyn Canvas2d, now_ms: f64) {
        self.proxy.redraw(canvas, now_ms);
    }
}
