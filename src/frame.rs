use crate::game::{HeartGame, UiCue};
use crate::overlay;
use crate::particles::CardScene;
use crate::render;
use glam::Vec3;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation frame and the DOM handlers share.
pub struct FrameContext<'a> {
    pub scene: CardScene,
    pub game: HeartGame,
    pub game_rng: StdRng,
    pub gpu: Option<render::GpuState<'a>>,
    pub audio_ctx: Option<web::AudioContext>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub clock: Instant,
}

impl<'a> FrameContext<'a> {
    /// Milliseconds since the page started; the single time base for the
    /// scene, the game and the bloom transition.
    pub fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    pub fn frame(&mut self) {
        let now_ms = self.now_ms();

        let cues = self.game.poll(now_ms, &mut self.game_rng);
        for cue in cues {
            self.apply_cue(cue);
        }

        let uniforms = self.scene.update(now_ms);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.upload_particles(self.scene.buffer_mut());
            if let Err(e) = g.render(self.scene.camera(), &uniforms, now_ms) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn apply_cue(&self, cue: UiCue) {
        log::debug!("[frame] cue {:?}", cue);
        match cue {
            UiCue::HideLobby => overlay::hide_lobby(&self.document),
            UiCue::ShowHeart { x, y } => overlay::show_heart(&self.document, x, y),
            UiCue::DimBackground => overlay::dim(&self.document),
            UiCue::ShowMessage => overlay::show_message(&self.document),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particle_count: usize,
    watermark: &[Vec3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, particle_count, watermark).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
