use crate::core::constants::INTERACTIVE_SELECTOR;
use crate::core::motion::client_to_ndc;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

/// Pointer position in normalized device coordinates of the viewport.
#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent) -> Vec2 {
    let p = pointer_client(ev);
    let size = viewport_size();
    client_to_ndc(p.x, p.y, size.x, size.y)
}

// ---------------- Hover helpers ----------------
/// Closest `a`/`button`/`[role=button]` ancestor (or self) of an event target.
#[inline]
pub fn closest_interactive(target: Option<web::EventTarget>) -> Option<web::Element> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    el.closest(INTERACTIVE_SELECTOR).ok().flatten()
}
