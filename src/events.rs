use crate::audio;
use crate::constants::{BLOOM_ROSE, HEART_ID, START_BUTTON_ID};
use crate::dom;
use crate::frame::FrameContext;
use crate::game::ClickOutcome;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Shared = Rc<RefCell<FrameContext<'static>>>;

pub fn wire_all(document: &web::Document, ctx: &Shared) {
    wire_pointer(ctx);
    wire_start_button(document, ctx);
    wire_heart(document, ctx);
}

/// Mouse moves and touch starts both steer the pointer attraction.
fn wire_pointer(ctx: &Shared) {
    let Some(window) = web::window() else {
        return;
    };

    let ctx_move = ctx.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (w, h) = dom::viewport_css_size();
        ctx_move.borrow_mut().scene.pointer_mut().set_target_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w as f32,
            h as f32,
        );
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let ctx_touch = ctx.clone();
    let on_touch = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let (w, h) = dom::viewport_css_size();
        ctx_touch.borrow_mut().scene.pointer_mut().set_target_client(
            touch.client_x() as f32,
            touch.client_y() as f32,
            w as f32,
            h as f32,
        );
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchstart", on_touch.as_ref().unchecked_ref());
    on_touch.forget();
}

/// Start button: unlock audio, fade the lobby, open the card and arm the game.
fn wire_start_button(document: &web::Document, ctx: &Shared) {
    let ctx = ctx.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        let mut c = ctx.borrow_mut();
        if c.audio_ctx.is_none() {
            match audio::create_context() {
                Ok(a) => c.audio_ctx = Some(a),
                Err(e) => log::warn!("{:?}", e),
            }
        }
        if let Some(a) = &c.audio_ctx {
            audio::begin(a);
        }
        overlay::fade_lobby(&c.document);
        let now_ms = c.now_ms();
        c.scene.open_card(now_ms);
        c.game.start(now_ms);
    });
}

fn wire_heart(document: &web::Document, ctx: &Shared) {
    let ctx = ctx.clone();
    dom::add_click_listener(document, HEART_ID, move || {
        let mut guard = ctx.borrow_mut();
        let c = &mut *guard;
        let now_ms = c.now_ms();
        let outcome = c.game.click(now_ms, &mut c.game_rng);
        if outcome == ClickOutcome::Ignored {
            return;
        }
        if let Some(a) = &c.audio_ctx {
            audio::play_water_drop(a);
        }
        match outcome {
            ClickOutcome::Respawn { x, y } => overlay::show_heart(&c.document, x, y),
            ClickOutcome::Completed => {
                overlay::hide_heart(&c.document);
                overlay::insert_dim_layer(&c.document);
                c.scene.morph_to_rose(now_ms);
                if let Some(g) = &mut c.gpu {
                    g.set_bloom(BLOOM_ROSE, now_ms);
                }
            }
            ClickOutcome::Ignored => {}
        }
    });
}
