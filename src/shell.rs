// The bits of page chrome the interactive layer depends on: the theme
// provider, the locale switcher and `data-i18n` text.

use crate::core::constants::{LOCALE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::core::i18n::{Dictionary, Locale, Translator};
use crate::core::theme::{Theme, ThemeAccess, ThemeCell};
use crate::dom::{self, Listener};
use std::rc::Rc;
use web_sys as web;

static ES_JSON: &str = include_str!("../locales/es.json");
static EN_JSON: &str = include_str!("../locales/en.json");

const DARK_CLASS: &str = "dark";

/// Theme provider backed by local storage and the `dark` class on `<html>`.
pub struct DomTheme {
    cell: ThemeCell,
    root: Option<web::Element>,
}

impl DomTheme {
    pub fn load(document: &web::Document) -> Self {
        let prefers_dark = web::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false);
        let stored = dom::local_storage_get(THEME_STORAGE_KEY);
        let theme = Theme::resolve(stored.as_deref(), prefers_dark);
        let this = Self {
            cell: ThemeCell::new(theme),
            root: document.document_element(),
        };
        this.apply(theme);
        this
    }

    fn apply(&self, theme: Theme) {
        if let Some(root) = &self.root {
            _ = root
                .class_list()
                .toggle_with_force(DARK_CLASS, theme == Theme::Dark);
        }
    }
}

impl ThemeAccess for DomTheme {
    fn theme(&self) -> Theme {
        self.cell.theme()
    }

    fn toggle_theme(&self) -> Theme {
        let next = self.cell.toggle_theme();
        self.apply(next);
        dom::local_storage_set(THEME_STORAGE_KEY, next.as_str());
        log::info!("[theme] {}", next.as_str());
        next
    }
}

/// `[data-theme-toggle]` buttons flip the theme.
pub fn wire_theme_toggles(document: &web::Document, theme: Rc<DomTheme>) -> Vec<Listener> {
    dom::query_all(document, "[data-theme-toggle]")
        .into_iter()
        .map(|el| {
            let theme = theme.clone();
            Listener::new(&el, "click", move |_: web::Event| {
                theme.toggle_theme();
            })
        })
        .collect()
}

fn parse_dictionary(locale: Locale, src: &str) -> Option<(Locale, Dictionary)> {
    match Dictionary::from_json(src) {
        Ok(d) => Some((locale, d)),
        Err(e) => {
            log::error!("[i18n] {} dictionary: {}", locale.tag(), e);
            None
        }
    }
}

pub fn load_translator() -> Translator {
    let browser = web::window().and_then(|w| w.navigator().language());
    let stored = dom::local_storage_get(LOCALE_STORAGE_KEY);
    let locale = Locale::resolve(stored.as_deref(), browser.as_deref());
    let dictionaries = [(Locale::Es, ES_JSON), (Locale::En, EN_JSON)]
        .into_iter()
        .filter_map(|(l, src)| parse_dictionary(l, src));
    Translator::new(locale, dictionaries)
}

/// Fill every `[data-i18n]` element with its translated text and mark the
/// active locale button.
pub fn apply_translations(document: &web::Document, tr: &Translator) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", tr.locale().tag());
    }
    for el in dom::query_all(document, "[data-i18n]") {
        if let Some(key) = el.get_attribute("data-i18n") {
            el.set_text_content(Some(&tr.t(&key)));
        }
    }
    for el in dom::query_all(document, "[data-locale]") {
        let active = el.get_attribute("data-locale").as_deref() == Some(tr.locale().tag());
        _ = el.set_attribute("aria-pressed", &active.to_string());
    }
}

/// `[data-locale="es|en"]` buttons switch language, persist the choice and
/// call `on_change` so mounted components can re-render.
pub fn wire_locale_switch(
    document: &web::Document,
    tr: Rc<Translator>,
    on_change: Rc<dyn Fn()>,
) -> Vec<Listener> {
    dom::query_all(document, "[data-locale]")
        .into_iter()
        .filter_map(|el| {
            let locale = el.get_attribute("data-locale").as_deref().and_then(Locale::from_tag)?;
            let tr = tr.clone();
            let on_change = on_change.clone();
            let doc = document.clone();
            Some(Listener::new(&el, "click", move |_: web::Event| {
                tr.set_locale(locale);
                dom::local_storage_set(LOCALE_STORAGE_KEY, locale.tag());
                apply_translations(&doc, &tr);
                on_change();
                log::info!("[i18n] locale {}", locale.tag());
            }))
        })
        .collect()
}
