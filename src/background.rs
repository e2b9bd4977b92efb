use crate::core::constants::{
    FIELD_CAMERA_Z, FIELD_POINT_COLOR, PARTICLE_COUNT, PARTICLE_RADIUS,
};
use crate::core::particles::{FieldMotion, ParticleField};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::input;
use crate::render::ParticleRenderer;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "bg-canvas";

pub struct BackgroundHandle {
    _frame: FrameLoop,
    _listeners: Vec<Listener>,
}

impl Drop for BackgroundHandle {
    fn drop(&mut self) {
        log::info!("[background] stopped");
    }
}

fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Listener {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    Listener::new(window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

/// Start the particle backdrop on `#bg-canvas`. `Ok(None)` when the page has
/// no such canvas.
pub async fn mount(document: &web::Document) -> anyhow::Result<Option<BackgroundHandle>> {
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let mut listeners = vec![wire_canvas_resize(&window, &canvas)];

    let field = ParticleField::generate(PARTICLE_COUNT, PARTICLE_RADIUS, &mut rand::thread_rng());
    let renderer = ParticleRenderer::new(&canvas, &field, FIELD_CAMERA_Z, FIELD_POINT_COLOR).await?;
    let renderer = Rc::new(RefCell::new(renderer));

    let pointer = Rc::new(Cell::new(Vec2::ZERO));
    let pointer_move = pointer.clone();
    listeners.push(Listener::new(
        &window,
        "pointermove",
        move |ev: web::MouseEvent| {
            pointer_move.set(input::pointer_ndc(&ev));
        },
    ));

    let started = Instant::now();
    let mut motion = FieldMotion::default();
    let mut last_error_logged = false;
    let frame = FrameLoop::start(move |_ts| {
        let elapsed = started.elapsed().as_secs_f32();
        motion.step(elapsed, pointer.get());
        let mut r = renderer.borrow_mut();
        r.resize_if_needed(canvas.width(), canvas.height());
        match r.render(motion.model_matrix()) {
            Ok(()) => last_error_logged = false,
            Err(e) if !last_error_logged => {
                log::error!("render error: {:?}", e);
                last_error_logged = true;
            }
            Err(_) => {}
        }
    })?;

    log::info!("[background] {} particles", field.len());
    Ok(Some(BackgroundHandle {
        _frame: frame,
        _listeners: listeners,
    }))
}
