use crate::core::constants::PRELOADER_MS;
use crate::core::style::display_style;
use crate::dom;
use gloo_timers::callback::Timeout;
use web_sys as web;

const PRELOADER_ID: &str = "preloader";

fn set_hidden(el: &web::Element, hidden: bool) {
    _ = el.class_list().toggle_with_force("hidden", hidden);
    // fallback when the stylesheet has no .hidden rule
    dom::set_styles(el, display_style(hidden));
    _ = el.set_attribute("aria-hidden", &hidden.to_string());
}

/// Splash screen shown while the page settles. Hidden after a fixed delay;
/// dropping the handle early hides it immediately.
pub struct Preloader {
    element: web::Element,
    timer: Option<Timeout>,
}

impl Preloader {
    pub fn show(document: &web::Document) -> Option<Self> {
        let element = document.get_element_by_id(PRELOADER_ID)?;
        set_hidden(&element, false);
        let el = element.clone();
        let timer = Timeout::new(PRELOADER_MS, move || {
            set_hidden(&el, true);
            log::info!("[preloader] hidden");
        });
        Some(Self {
            element,
            timer: Some(timer),
        })
    }
}

impl Drop for Preloader {
    fn drop(&mut self) {
        // Dropping the timeout cancels it.
        if self.timer.take().is_some() {
            set_hidden(&self.element, true);
        }
    }
}
