use crate::constants::{DIM_OPACITY, DIM_TRANSITION, HEART_ID, LOBBY_ID, MESSAGE_ID};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const DIM_LAYER_ID: &str = "dim-layer";

#[inline]
fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

/// Start the lobby fade-out (CSS transition on opacity).
pub fn fade_lobby(document: &web::Document) {
    if let Some(el) = dom::html_element(document, LOBBY_ID) {
        set_style(&el, "opacity", "0");
    }
}

pub fn hide_lobby(document: &web::Document) {
    if let Some(el) = dom::html_element(document, LOBBY_ID) {
        set_style(&el, "display", "none");
    }
}

pub fn show_heart(document: &web::Document, x: f32, y: f32) {
    if let Some(el) = dom::html_element(document, HEART_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = cl.add_1("visible");
        set_style(&el, "left", &format!("{x}px"));
        set_style(&el, "top", &format!("{y}px"));
    }
}

pub fn hide_heart(document: &web::Document) {
    if let Some(el) = dom::html_element(document, HEART_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("visible");
        _ = cl.add_1("hidden");
    }
}

pub fn show_message(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MESSAGE_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = cl.add_1("visible");
    }
}

/// Insert a transparent full-screen black layer that `dim` later fades in.
pub fn insert_dim_layer(document: &web::Document) {
    if document.get_element_by_id(DIM_LAYER_ID).is_some() {
        return;
    }
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    el.set_id(DIM_LAYER_ID);
    for (name, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("background-color", "black"),
        ("opacity", "0"),
        ("transition", DIM_TRANSITION),
        ("z-index", "5"),
        ("pointer-events", "none"),
    ] {
        set_style(&el, name, value);
    }
    _ = body.append_child(&el);
}

pub fn dim(document: &web::Document) {
    if let Some(el) = dom::html_element(document, DIM_LAYER_ID) {
        set_style(&el, "opacity", DIM_OPACITY);
    }
}
