#![cfg(target_arch = "wasm32")]
use folio_core::{FieldAnimation, FieldConfig, LoopHandle, ParticleField, Typewriter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod frame;
mod observers;
mod typing;

use canvas::CanvasSurface;

type Background = FieldAnimation<CanvasSurface>;

/// Particle background on `#heroParticles`, resized with the viewport.
fn start_background(document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, "heroParticles")
        .ok_or_else(|| anyhow::anyhow!("missing #heroParticles canvas"))?;
    let config = FieldConfig::default();
    config.validate()?;

    dom::sync_canvas_to_viewport(&canvas);
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let mut field = ParticleField::new(config);
    field.resize(
        canvas.width() as f64,
        canvas.height() as f64,
        &mut *rng.borrow_mut(),
    );
    log::info!(
        "[field] {} particles on {}x{}",
        field.len(),
        canvas.width(),
        canvas.height()
    );

    let surface = CanvasSurface::from_canvas(&canvas)?;
    let anim: Rc<RefCell<Background>> = Rc::new(RefCell::new(FieldAnimation::new(field, surface)));
    wire_resize(&canvas, anim.clone(), rng);

    // runs for the lifetime of the page
    frame::start_loop(anim, LoopHandle::new());
    Ok(())
}

fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    anim: Rc<RefCell<Background>>,
    rng: Rc<RefCell<StdRng>>,
) {
    let Some(window) = web::window() else { return };
    let canvas = canvas.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        dom::sync_canvas_to_viewport(&canvas);
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        anim.borrow_mut()
            .field
            .resize(w, h, &mut *rng.borrow_mut());
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The background is decorative; the rest of the page still wires up without it.
    if let Err(e) = start_background(&document) {
        log::error!("[field] disabled: {:?}", e);
    }

    let desktop = folio_core::scroll::is_desktop(dom::inner_width(&window));
    if desktop {
        events::wire_cursor_glow(&document);
        events::wire_parallax(&document);
    }

    let navbar = dom::element_by_id::<web::Element>(&document, "navbar");
    let back_to_top = dom::element_by_id::<web::Element>(&document, "backToTop");
    if let Some(btn) = &back_to_top {
        events::wire_back_to_top(&window, btn);
    }
    events::wire_scroll_state(&window, navbar, back_to_top);
    events::wire_nav_menu(&document);
    events::wire_smooth_anchors(&document);

    typing::start_typing(&document, Typewriter::with_default_phrases());
    observers::trigger_hero_animations(&document);

    observers::wire_active_nav(&document)?;
    observers::wire_scroll_reveal(&document)?;
    observers::wire_counters(&document)?;

    log::info!("folio-web ready (desktop effects: {})", desktop);
    Ok(())
}
