use crate::canvas::WebCanvas;
use crate::dom;
use crate::events::Listener;
use backdrop_core::{AnimatedSurface, Effect, FrameId, FrameScheduler, LoopState, MotionMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Milliseconds since mount; shared by input handlers and frames so ripple
/// timestamps and frame times use one timebase.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// `requestAnimationFrame` behind the core scheduler trait.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(FrameId)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        _ = self.window.cancel_animation_frame(id.0);
    }
}

pub type SharedSurface<E> = Rc<RefCell<AnimatedSurface<E, RafScheduler>>>;

/// A mounted canvas effect: its surface, frame callback and resize listener.
pub struct SurfaceLoop<E: Effect + 'static> {
    pub surface: SharedSurface<E>,
    callback: FrameCallback,
    resize: Option<Listener>,
}

impl<E: Effect + 'static> SurfaceLoop<E> {
    pub fn start(
        window: &web::Window,
        canvas_el: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        effect: E,
        mode: MotionMode,
        clock: Clock,
        tag: &'static str,
    ) -> anyhow::Result<Self> {
        let viewport = dom::window_viewport(window)?;
        dom::sync_canvas_backing_size(&canvas_el, &viewport);

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler::new(window.clone(), callback.clone());
        let surface = Rc::new(RefCell::new(AnimatedSurface::new(effect, viewport, mode, scheduler)));
        let canvas = Rc::new(RefCell::new(WebCanvas::new(ctx)));

        let surface_tick = surface.clone();
        let canvas_tick = canvas.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now = clock.now_ms();
            surface_tick
                .borrow_mut()
                .frame(&mut *canvas_tick.borrow_mut(), now);
        }) as Box<dyn FnMut()>));

        let state = surface
            .borrow_mut()
            .start(Some(&mut *canvas.borrow_mut()), clock.now_ms());
        log::info!("[{}] started: {:?}", tag, state);

        let resize = if state == LoopState::Unavailable {
            None
        } else {
            let window_resize = window.clone();
            let surface_resize = surface.clone();
            Some(Listener::new(window, "resize", move |_ev| {
                let viewport = match dom::window_viewport(&window_resize) {
                    Ok(v) => v,
                    Err(e) => {
                        log::warn!("[{}] resize ignored: {}", tag, e);
                        return;
                    }
                };
                dom::sync_canvas_backing_size(&canvas_el, &viewport);
                let (w, h) = surface_resize.borrow_mut().resize(
                    viewport,
                    &mut *canvas.borrow_mut(),
                    clock.now_ms(),
                );
                log::debug!("[{}] resized backing {}x{}", tag, w, h);
            }))
        };

        Ok(Self {
            surface,
            callback,
            resize,
        })
    }

    /// Cancel the pending frame, drop the listener and frame closure, and
    /// hand back the effect if nothing else still holds it.
    pub fn shutdown(mut self) -> Option<E> {
        self.surface.borrow_mut().stop();
        drop(self.resize.take());
        // the closure owns a clone of the surface; dropping it breaks the cycle
        self.callback.borrow_mut().take();
        Rc::try_unwrap(self.surface)
            .ok()
            .map(|s| s.into_inner().into_effect())
    }
}
