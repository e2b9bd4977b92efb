use crate::core::constants::{CURSOR_LERP_ALPHA, CURSOR_OFFSCREEN};
use crate::core::hover::{HoverChange, HoverTracker};
use crate::core::motion::{cursor_media_query, cursor_transform, Smoother};
use crate::core::theme::{Theme, ThemeAccess};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const CURSOR_ID: &str = "custom-cursor";
const HOVER_CLASS: &str = "hovering";

/// Live cursor. Dropping it stops the frame loop, removes the listeners and
/// takes out the element if this module created it.
pub struct CursorHandle {
    _frame: FrameLoop,
    _listeners: Vec<Listener>,
    element: web::Element,
    owns_element: bool,
}

impl Drop for CursorHandle {
    fn drop(&mut self) {
        if self.owns_element {
            self.element.remove();
        }
        log::info!("[cursor] unmounted");
    }
}

struct CursorState {
    smoother: Smoother,
    hover: HoverTracker<web::Element>,
    applied: Option<(Theme, bool)>,
}

fn cursor_element(document: &web::Document) -> anyhow::Result<(web::Element, bool)> {
    if let Some(el) = document.get_element_by_id(CURSOR_ID) {
        return Ok((el, false));
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create cursor element: {:?}", e))?;
    el.set_id(CURSOR_ID);
    _ = el.set_attribute("aria-hidden", "true");
    dom::set_styles(
        &el,
        "position:fixed;top:0;left:0;border-radius:9999px;pointer-events:none;z-index:50;transition:width 150ms ease-in-out, height 150ms ease-in-out, margin 150ms ease-in-out",
    );
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("append cursor element: {:?}", e))?;
    Ok((el, true))
}

/// Mount the cursor. `Ok(None)` on narrow or touch screens, where the native
/// cursor (or none) is kept.
pub fn mount(
    document: &web::Document,
    theme: Rc<dyn ThemeAccess>,
) -> anyhow::Result<Option<CursorHandle>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let fine_pointer = window
        .match_media(&cursor_media_query())
        .ok()
        .flatten()
        .is_some_and(|m| m.matches());
    if !fine_pointer {
        return Ok(None);
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let (element, owns_element) = cursor_element(document)?;

    let state = Rc::new(RefCell::new(CursorState {
        smoother: Smoother::new(CURSOR_LERP_ALPHA, Vec2::from_array(CURSOR_OFFSCREEN)),
        hover: HoverTracker::new(),
        applied: None,
    }));

    let mut listeners = Vec::with_capacity(3);

    let st = state.clone();
    listeners.push(Listener::new(
        &window,
        "pointermove",
        move |ev: web::MouseEvent| {
            st.borrow_mut().smoother.set_target(input::pointer_client(&ev));
        },
    ));

    let st = state.clone();
    let el = element.clone();
    listeners.push(Listener::new(&body, "pointerover", move |ev: web::MouseEvent| {
        let target = input::closest_interactive(ev.target());
        if st.borrow_mut().hover.pointer_over(target) == Some(HoverChange::Entered) {
            _ = el.class_list().add_1(HOVER_CLASS);
        }
    }));

    let st = state.clone();
    let el = element.clone();
    listeners.push(Listener::new(&body, "pointerout", move |ev: web::MouseEvent| {
        let from = input::closest_interactive(ev.target());
        let to = input::closest_interactive(ev.related_target());
        if st.borrow_mut().hover.pointer_out(from, to) == Some(HoverChange::Left) {
            _ = el.class_list().remove_1(HOVER_CLASS);
        }
    }));

    let st = state;
    let el = element.clone();
    let html = element
        .clone()
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not an HTML element", CURSOR_ID))?;
    let frame = FrameLoop::start(move |_ts| {
        let mut s = st.borrow_mut();
        let pos = s.smoother.step();
        _ = html.style().set_property("transform", &cursor_transform(pos));

        // Restyle only when the theme or hover state actually changed.
        let wanted = (theme.theme(), s.hover.is_hovering());
        if s.applied != Some(wanted) {
            dom::set_styles(&el, &wanted.0.cursor_style(wanted.1).to_css());
            s.applied = Some(wanted);
        }
    })?;

    log::info!("[cursor] mounted (alpha={})", CURSOR_LERP_ALPHA);
    Ok(Some(CursorHandle {
        _frame: frame,
        _listeners: listeners,
        element,
        owns_element,
    }))
}
