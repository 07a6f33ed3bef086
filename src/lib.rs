#![cfg(target_arch = "wasm32")]
use crate::particles::constants::{WATERMARK_CELL_PX, WATERMARK_LABEL};
use crate::particles::{particle_count_for_width, rasterize_text, Camera, CardScene, ChoreographyParams};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod game;
mod overlay;
mod particles;
mod raster;
mod render;

type Shared = Rc<RefCell<frame::FrameContext<'static>>>;

/// Keep the canvas backing store, camera aspect and heart bounds in step
/// with the window.
fn wire_canvas_resize(ctx: &Shared) {
    let ctx_resize = ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let mut c = ctx_resize.borrow_mut();
        dom::sync_canvas_backing_size(&c.canvas);
        let (w, h) = dom::viewport_css_size();
        c.scene.camera_mut().resize(w as f32, h as f32);
        c.game.set_viewport(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rose-card starting");

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

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let (css_w, css_h) = dom::viewport_css_size();
    let particle_count = particle_count_for_width(css_w);

    let clock = Instant::now();
    let scene = CardScene::new(
        particle_count,
        Camera::new(css_w as f32, css_h as f32),
        ChoreographyParams::default(),
        StdRng::from_entropy(),
        0.0,
    );

    let text_raster = raster::CanvasTextRaster::new(document.clone());
    if let Err(e) = text_raster.load_font().await {
        log::warn!("[init] watermark font failed to load: {:?}", e);
    }
    let watermark = rasterize_text(&text_raster, WATERMARK_LABEL, WATERMARK_CELL_PX);

    let gpu = frame::init_gpu(&canvas, scene.buffer().len(), &watermark.points).await;
    if gpu.is_none() {
        anyhow::bail!("renderer unavailable");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        game: game::HeartGame::new(css_w as f32, css_h as f32),
        game_rng: StdRng::from_entropy(),
        gpu,
        audio_ctx: None,
        canvas,
        document: document.clone(),
        clock,
    }));

    wire_canvas_resize(&frame_ctx);
    events::wire_all(&document, &frame_ctx);
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
