use crate::constants::*;
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn create_context() -> anyhow::Result<web::AudioContext> {
    web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext error: {:?}", e))
}

/// Browsers start contexts suspended until a user gesture; call from one.
pub fn resume_if_suspended(audio_ctx: &web::AudioContext) {
    if audio_ctx.state() == web::AudioContextState::Suspended {
        _ = audio_ctx.resume();
    }
}

/// Start the background track; autoplay refusal is logged and ignored.
pub fn play_music(document: &web::Document) {
    let Some(el) = document.get_element_by_id(MUSIC_ID) else {
        log::warn!("missing #{}", MUSIC_ID);
        return;
    };
    let Ok(media) = el.dyn_into::<web::HtmlMediaElement>() else {
        return;
    };
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::info!("music blocked: {:?}", e);
            }
        }),
        Err(e) => log::info!("music blocked: {:?}", e),
    }
}

/// Short sine "water drop": a fast downward pitch sweep under an
/// exponential fade.
pub fn play_water_drop(audio_ctx: &web::AudioContext) {
    let osc = match web::OscillatorNode::new(audio_ctx) {
        Ok(o) => o,
        Err(e) => {
            log::error!("OscillatorNode error: {:?}", e);
            return;
        }
    };
    let gain = match web::GainNode::new(audio_ctx) {
        Ok(g) => g,
        Err(e) => {
            log::error!("GainNode error: {:?}", e);
            return;
        }
    };
    let now = audio_ctx.current_time();
    osc.set_type(web::OscillatorType::Sine);
    _ = osc.frequency().set_value_at_time(DROP_FREQ_START_HZ, now);
    _ = osc
        .frequency()
        .exponential_ramp_to_value_at_time(DROP_FREQ_END_HZ, now + DROP_SWEEP_SEC);
    _ = gain.gain().set_value_at_time(DROP_GAIN_START, now);
    _ = gain
        .gain()
        .exponential_ramp_to_value_at_time(DROP_GAIN_END, now + DROP_DURATION_SEC);
    _ = osc.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&audio_ctx.destination());
    _ = osc.start();
    _ = osc.stop_with_when(now + DROP_DURATION_SEC);
}

/// Resume audio and start the music from the start-button gesture.
pub fn begin(audio_ctx: &web::AudioContext) {
    resume_if_suspended(audio_ctx);
    if let Some(document) = dom::window_document() {
        play_music(&document);
    }
}
