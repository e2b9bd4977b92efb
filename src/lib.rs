#![cfg(target_arch = "wasm32")]
use crate::core::lifecycle::Generations;
use crate::core::theme::ThemeAccess;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod background;
mod config;
mod contact;
mod core;
mod cursor;
mod dom;
mod frame;
mod input;
mod preloader;
mod relay;
mod render;
mod reveal;
mod shell;

/// Everything mounted on the page. Each handle tears its piece down on drop.
#[derive(Default)]
struct Site {
    generation: u64,
    preloader: Option<preloader::Preloader>,
    cursor: Option<cursor::CursorHandle>,
    reveal: Option<reveal::RevealHandle>,
    contact: Option<contact::ContactHandle>,
    background: Option<background::BackgroundHandle>,
    shell_listeners: Vec<dom::Listener>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
    static GENERATIONS: Generations = Generations::new();
}

fn with_site(f: impl FnOnce(&mut Site)) {
    SITE.with(|s| {
        if let Some(site) = s.borrow_mut().as_mut() {
            f(site);
        }
    });
}

/// A component that fails to mount is logged and skipped; the rest of the
/// page keeps working.
fn keep<T>(what: &str, res: anyhow::Result<Option<T>>) -> Option<T> {
    match res {
        Ok(Some(v)) => Some(v),
        Ok(None) => {
            log::info!("[{}] not on this page", what);
            None
        }
        Err(e) => {
            log::error!("[{}] mount failed: {:?}", what, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ludaut-web starting");
    mount();
    Ok(())
}

/// Mount every component onto the current document. Does nothing while a
/// previous mount is still live; call `unmount()` first to remount.
#[wasm_bindgen]
pub fn mount() {
    let Some(generation) = GENERATIONS.with(Generations::begin) else {
        log::info!("already mounted");
        return;
    };
    spawn_local(async move {
        if let Err(e) = init(generation).await {
            log::error!("init error: {:?}", e);
            if GENERATIONS.with(|g| g.is_live(generation)) {
                unmount();
            }
        }
    });
}

async fn init(generation: u64) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let theme = Rc::new(shell::DomTheme::load(&document));
    let translator = Rc::new(shell::load_translator());
    shell::apply_translations(&document, &translator);

    let mut site = Site {
        generation,
        preloader: preloader::Preloader::show(&document),
        ..Site::default()
    };
    site.shell_listeners
        .extend(shell::wire_theme_toggles(&document, theme.clone()));
    let refresh: Rc<dyn Fn()> = Rc::new(|| {
        with_site(|s| {
            if let Some(c) = &s.contact {
                c.refresh();
            }
        })
    });
    site.shell_listeners
        .extend(shell::wire_locale_switch(&document, translator.clone(), refresh));

    let cursor_theme: Rc<dyn ThemeAccess> = theme;
    site.cursor = keep("cursor", cursor::mount(&document, cursor_theme));
    site.reveal = keep("reveal", reveal::mount(&document));
    let relay = relay::EmailJsRelay::new(config::RelayConfig::load(&document));
    site.contact = keep("contact", contact::mount(&document, translator, relay));
    SITE.with(|s| *s.borrow_mut() = Some(site));

    // GPU setup is async; the rest of the page is live while it runs.
    // Only the mount that started this setup may receive it.
    let mut slot = keep("background", background::mount(&document).await);
    if GENERATIONS.with(|g| g.is_live(generation)) {
        with_site(|s| {
            if s.generation == generation {
                s.background = slot.take();
            }
        });
    }
    if slot.is_some() {
        log::info!("[background] site unmounted during setup; discarding");
    }
    Ok(())
}

/// Tear down every mounted component: listeners, frame loops, observers and
/// timers. Safe to call more than once; `mount()` brings the page back.
#[wasm_bindgen]
pub fn unmount() {
    GENERATIONS.with(Generations::end);
    let site = SITE.with(|s| s.borrow_mut().take());
    if let Some(site) = site {
        drop(site);
        log::info!("ludaut-web unmounted");
    }
}
