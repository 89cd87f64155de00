use crate::constants::LIQUID_ATTRIBUTE;
use crate::frame::{FrameCallback, RafScheduler};
use backdrop_core::{FrameLoop, LiquidDistortion, MotionMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

struct LiquidState {
    frames: FrameLoop<RafScheduler>,
    liquid: LiquidDistortion,
    turbulence: web::Element,
}

/// Animates the turbulence `baseFrequency` of the liquid SVG filter. Not
/// started at all under reduced motion; the authored markup stays static.
pub struct LiquidLoop {
    state: Rc<RefCell<LiquidState>>,
    callback: FrameCallback,
}

impl LiquidLoop {
    pub fn start(window: &web::Window, turbulence: web::Element) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler::new(window.clone(), callback.clone());
        let state = Rc::new(RefCell::new(LiquidState {
            frames: FrameLoop::new(MotionMode::Animated, scheduler),
            liquid: LiquidDistortion::new(),
            turbulence,
        }));

        let state_tick = state.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut s = state_tick.borrow_mut();
            if s.frames.advance() {
                s.liquid.advance();
                let value = s.liquid.attribute();
                _ = s.turbulence.set_attribute(LIQUID_ATTRIBUTE, &value);
            }
        }) as Box<dyn FnMut()>));

        let started = state.borrow_mut().frames.start();
        log::info!("[liquid] started: {:?}", started);
        Self { state, callback }
    }

    pub fn shutdown(self) {
        self.state.borrow_mut().frames.stop();
        self.callback.borrow_mut().take();
    }
}
