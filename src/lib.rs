#![cfg(target_arch = "wasm32")]
use instant::Instant;
use showcase_core::config::query_pairs;
use showcase_core::{AssetProvider, ProceduralAssets, SceneConfig, SignalBus, Stage};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Defaults overridden by `?name=value` pairs from the page URL.
fn config_from_location(window: &web::Window) -> SceneConfig {
    let mut config = SceneConfig::default();
    if let Ok(search) = window.location().search() {
        config.apply_pairs(query_pairs(&search));
    }
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

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

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let config = config_from_location(&window);
    log::info!("[config] {:?}", config);

    let assets = ProceduralAssets;
    let bus = Rc::new(SignalBus::new());
    let stage = Rc::new(RefCell::new(Stage::new(config, &assets)));
    stage.borrow_mut().set_loading_progress(assets.progress());
    let hovered = Rc::new(Cell::new(false));

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        stage: stage.clone(),
        bus: bus.clone(),
        hovered: hovered.clone(),
    });
    events::wire_orientation(stage.clone());
    events::wire_window_signals(&bus);
    events::wire_overlay_buttons(&document, &bus);
    events::wire_global_keydown(bus.clone());

    // a missing GPU still leaves the overlays and focus flow working
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        stage,
        bus,
        hovered,
        document,
        canvas,
        overlays: overlay::OverlayView::default(),
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
