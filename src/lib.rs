#![cfg(target_arch = "wasm32")]
use backdrop_core::{
    Aurora, AuroraConfig, CursorConfig, CursorHost, CursorProxy, Environment, FieldConfig,
    MotionMode, ParticleField,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod liquid;

use constants::*;
use events::cursor::{CursorLayer, DomCursorHost};
use events::Listener;
use frame::{Clock, SurfaceLoop};
use liquid::LiquidLoop;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web loaded");
    Ok(())
}

/// Handle for everything `mount` started. Dropping it (or calling
/// `unmount`) tears every effect down.
#[wasm_bindgen]
pub struct Backdrop {
    aurora: Option<SurfaceLoop<Aurora>>,
    particles: Option<SurfaceLoop<ParticleField>>,
    particle_input: Vec<Listener>,
    cursor: Option<MountedCursor>,
    liquid: Option<LiquidLoop>,
}

struct MountedCursor {
    surface: SurfaceLoop<CursorLayer>,
    host: DomCursorHost,
    prior_root_cursor: String,
}

#[wasm_bindgen]
impl Backdrop {
    pub fn unmount(self) {
        // teardown lives in Drop
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        // listeners first so nothing else holds the particle surface
        self.particle_input.clear();
        if let Some(p) = self.particles.take() {
            p.shutdown();
        }
        if let Some(a) = self.aurora.take() {
            a.shutdown();
        }
        if let Some(l) = self.liquid.take() {
            l.shutdown();
        }
        if let Some(mut cursor) = self.cursor.take() {
            match cursor.surface.shutdown() {
                Some(layer) => layer.proxy.unmount(&mut cursor.host),
                None => {
                    log::warn!("[cursor] proxy still shared at teardown");
                    cursor.host.release(&cursor.prior_root_cursor);
                }
            }
        }
        log::info!("backdrop unmounted");
    }
}

/// Start every effect whose element is present on the page.
#[wasm_bindgen]
pub fn mount() -> Result<Backdrop, JsValue> {
    mount_inner().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn mount_inner() -> anyhow::Result<Backdrop> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let env = Environment {
        reduced_motion: dom::media_matches(&window, REDUCED_MOTION_QUERY),
        fine_pointer_desktop: dom::media_matches(&window, FINE_POINTER_DESKTOP_QUERY),
        theme: dom::theme(&document),
    };
    log::info!("[mount] {:?}", env);
    let mode = MotionMode::from_reduced_motion(env.reduced_motion);
    let clock = Clock::new();

    let aurora = match canvas_with_context(&document, AURORA_CANVAS_ID) {
        Some((el, ctx)) => {
            let (w, h) = dom::window_viewport(&window)?.css_size();
            let effect = Aurora::new(w, h, AuroraConfig::default());
            Some(SurfaceLoop::start(&window, el, ctx, effect, mode, clock, "aurora")?)
        }
        None => None,
    };

    let (particles, particle_input) = match canvas_with_context(&document, PARTICLE_CANVAS_ID) {
        Some((el, ctx)) => {
            let (w, h) = dom::window_viewport(&window)?.css_size();
            let field = ParticleField::new(
                w,
                h,
                FieldConfig::for_viewport_width(w),
                env.theme,
                StdRng::from_entropy(),
            )?;
            let mounted = SurfaceLoop::start(&window, el, ctx, field, mode, clock, "particles")?;
            let input = events::pointer::wire_particle_pointer(&window, &mounted.surface);
            (Some(mounted), input)
        }
        None => (None, Vec::new()),
    };

    let cursor = mount_cursor(&window, &document, &env, clock)?;

    let liquid = if env.reduced_motion {
        None
    } else {
        match document.get_element_by_id(LIQUID_TURBULENCE_ID) {
            Some(el) => Some(LiquidLoop::start(&window, el)),
            None => {
                log::warn!("[liquid] missing #{}", LIQUID_TURBULENCE_ID);
                None
            }
        }
    };

    Ok(Backdrop {
        aurora,
        particles,
        particle_input,
        cursor,
        liquid,
    })
}

fn mount_cursor(
    window: &web::Window,
    document: &web::Document,
    env: &Environment,
    clock: Clock,
) -> anyhow::Result<Option<MountedCursor>> {
    // gate before touching the canvas: touch and narrow devices get nothing
    if !env.cursor_enabled() {
        log::info!("[cursor] disabled for this device");
        return Ok(None);
    }
    let Some((el, ctx)) = canvas_with_context(document, CURSOR_CANVAS_ID) else {
        return Ok(None);
    };
    let mut host = DomCursorHost::new(window.clone(), dom::root_element(document), clock);
    let Some(proxy) = CursorProxy::mount(env, CursorConfig::default(), &mut host)? else {
        return Ok(None);
    };
    let prior_root_cursor = proxy.prior_root_cursor().to_owned();
    let layer = CursorLayer::new(proxy, host.queue());
    // the cursor follows the pointer regardless of the motion preference
    match SurfaceLoop::start(window, el, ctx, layer, MotionMode::Animated, clock, "cursor") {
        Ok(surface) => Ok(Some(MountedCursor {
            surface,
            host,
            prior_root_cursor,
        })),
        Err(e) => {
            // the proxy went down with the failed surface; give the cursor back
            host.release(&prior_root_cursor);
            Err(e)
        }
    }
}

fn canvas_with_context(
    document: &web::Document,
    id: &str,
) -> Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let Some(el) = dom::canvas_by_id(document, id) else {
        log::warn!("[mount] missing canvas #{}", id);
        return None;
    };
    match dom::context_2d(&el) {
        Some(ctx) => Some((el, ctx)),
        None => {
            log::warn!("[mount] no 2d context for #{}", id);
            None
        }
    }
}
