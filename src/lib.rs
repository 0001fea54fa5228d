#![cfg(target_arch = "wasm32")]
use crate::constants::{CONTACT_FORM_ID, PARTICLES_CANVAS_ID, YEAR_ID};
use crate::core::{FieldParams, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod status;
mod video;

/// Set up the particle canvas and start its animation loop. `Ok(None)` when the
/// page has no canvas or the browser gives no 2D context.
fn wire_particles(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<frame::LoopHandle>> {
    let Some(canvas) = document
        .get_element_by_id(PARTICLES_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return Ok(None);
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    else {
        log::debug!("[particles] no 2d context");
        return Ok(None);
    };

    let (w, h) = dom::sync_canvas_size(&canvas);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(
        w as f32,
        h as f32,
        FieldParams::default(),
        seed,
    )));
    log::info!(
        "[particles] {} particles on {}x{}",
        field.borrow().particles().len(),
        w,
        h
    );

    let field_resize = field.clone();
    let canvas_resize = canvas.clone();
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        let (w, h) = dom::sync_canvas_size(&canvas_resize);
        field_resize.borrow_mut().resize(w as f32, h as f32);
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { field, ctx }));
    let handle = frame::start_loop(frame_ctx);

    // Tear the loop down when the page is really going away (not into bfcache).
    let handle_hide = handle.clone();
    dom::add_listener(window, "pagehide", move |ev: web::PageTransitionEvent| {
        if !ev.persisted() && !handle_hide.is_stopped() {
            handle_hide.stop();
            log::debug!("[particles] loop stopped");
        }
    });
    Ok(Some(handle))
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::fill_year(&document, YEAR_ID);

    match wire_particles(&window, &document) {
        Ok(Some(_loop)) => {}
        Ok(None) => log::debug!("[particles] skipped"),
        Err(e) => log::error!("[particles] init error: {:?}", e),
    }

    match video::wire_lazy_videos(&window, &document) {
        Ok(n) => log::info!("[video] observing {} lazy videos", n),
        Err(e) => log::error!("[video] observer error: {:?}", e),
    }
    let n = video::wire_single_playback(&document);
    log::info!("[video] single playback across {} videos", n);

    let n = events::wire_tilt_cards(&document);
    log::info!("[tilt] {} cards", n);

    if events::wire_menu_toggle(&document) {
        log::info!("[menu] toggle wired");
    }

    if let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        events::wire_contact_form(&document, form);
        log::info!("[form] contact form wired");
    }

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    let run = || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    };

    // Wait for the markup when the module runs before the parser is done.
    match dom::window_document() {
        Some(doc) if doc.ready_state() == "loading" => {
            let mut run = Some(run);
            dom::add_listener(&doc, "DOMContentLoaded", move |_ev: web::Event| {
                if let Some(run) = run.take() {
                    run();
                }
            });
        }
        _ => run(),
    }
    Ok(())
}
