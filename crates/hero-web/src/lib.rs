#![cfg(target_arch = "wasm32")]
use hero_core::{Camera, PointerCell, Scene, SceneParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod sizing;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID)?;

    // Backing size must be set before the surface is configured
    events::wire_canvas_resize(&canvas);

    let pointer = Rc::new(PointerCell::new());
    events::wire_pointer(pointer.clone());

    let camera = Camera::for_surface(canvas.width(), canvas.height());
    let params = SceneParams::for_viewport(camera.viewport_at_target(), rand::random());
    let scene = Scene::new(params)?;
    log::info!(
        "[scene] {} particles, {} segment slots",
        scene.particles.len(),
        scene.graph.lines().capacity()
    );

    let Some(gpu) = frame::init_gpu(&canvas, &scene).await else {
        log::warn!("[gpu] unavailable; background not displayed");
        return Ok(());
    };

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        gpu,
        canvas,
        pointer,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Reports whether `navigator.gpu` exists, so the page can hide the canvas
/// on browsers without WebGPU.
#[wasm_bindgen]
pub fn webgpu_available() -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let navigator = window.navigator();
    js_sys::Reflect::get(&navigator, &JsValue::from_str("gpu"))
        .map(|gpu| !gpu.is_undefined())
        .unwrap_or(false)
}
