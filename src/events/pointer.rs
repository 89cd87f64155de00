use super::Listener;
use crate::constants::TOUCH_RELEASE_EVENTS;
use crate::frame::SharedSurface;
use backdrop_core::ParticleField;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn mouse_client_pos(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

/// Primary touch point, if any.
#[inline]
pub fn touch_client_pos(ev: &web::Event) -> Option<Vec2> {
    let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

/// Feed window mouse and touch input into the particle field's pointer.
/// The canvas covers the viewport, so client coordinates are canvas css px.
pub fn wire_particle_pointer(window: &web::Window, surface: &SharedSurface<ParticleField>) -> Vec<Listener> {
    let s = surface.clone();
    let mouse = Listener::new(window, "mousemove", move |ev| {
        if let Some(pos) = mouse_client_pos(&ev) {
            s.borrow_mut().effect_mut().pointer_mut().move_to(pos);
        }
    });

    let s = surface.clone();
    let touch_move = Listener::new(window, "touchmove", move |ev| {
        if let Some(pos) = touch_client_pos(&ev) {
            s.borrow_mut().effect_mut().pointer_mut().move_to(pos);
        }
    });

    let mut input = vec![mouse, touch_move];
    for event in TOUCH_RELEASE_EVENTS {
        let s = surface.clone();
        input.push(Listener::new(window, event, move |_ev| {
            s.borrow_mut().effect_mut().pointer_mut().release();
        }));
    }
    input
}
