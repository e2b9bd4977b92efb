use crate::core::constants::REVEAL_THRESHOLD;
use crate::core::reveal::{hidden_style, parse_delay, visible_style, Reveal};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_SELECTOR: &str = "[data-reveal]";
const DELAY_ATTR: &str = "data-reveal-delay";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Owns the intersection observer; dropping it disconnects without firing.
pub struct RevealHandle {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::info!("[reveal] observer disconnected");
    }
}

/// Hide and observe every `[data-reveal]` block. Returns `None` when the page
/// has none.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<RevealHandle>> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(None);
    }

    let blocks: Vec<(web::Element, Reveal)> = elements
        .into_iter()
        .map(|el| {
            let delay = parse_delay(el.get_attribute(DELAY_ATTR).as_deref());
            dom::set_styles(&el, &hidden_style());
            (el, Reveal::new(delay))
        })
        .collect();
    let blocks = Rc::new(RefCell::new(blocks));

    let blocks_cb = blocks.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let mut blocks = blocks_cb.borrow_mut();
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some((el, reveal)) = blocks.iter_mut().find(|(el, _)| *el == target) else {
                    continue;
                };
                let ratio = entry.intersection_ratio();
                if let Some(trigger) = reveal.report_entry(ratio, entry.is_intersecting()) {
                    dom::set_styles(el, &visible_style(trigger.delay_sec));
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for (el, _) in blocks.borrow().iter() {
        observer.observe(el);
    }

    log::info!("[reveal] observing {} blocks", blocks.borrow().len());
    Ok(Some(RevealHandle {
        observer,
        _callback: callback,
    }))
}
