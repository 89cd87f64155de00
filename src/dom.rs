use crate::constants::*;
use backdrop_core::{Theme, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport from the window's inner size and device pixel ratio.
pub fn window_viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Ok(Viewport::new(width, height, window.device_pixel_ratio())?)
}

/// One-time media query read; unsupported queries count as "no match".
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn is_dark_theme(document: &web::Document) -> bool {
    document
        .document_element()
        .map(|el| el.class_list().contains(DARK_THEME_CLASS))
        .unwrap_or(false)
}

#[inline]
pub fn theme(document: &web::Document) -> Theme {
    Theme::from_dark_flag(is_dark_theme(document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Size the backing buffer for the viewport and pin the css size. Writing
/// the width clears the canvas, so unchanged sizes are left alone.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    let (css_w, css_h) = viewport.css_size();
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
}

pub fn root_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
