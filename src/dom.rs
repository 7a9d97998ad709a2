use crate::constants::*;
use holo_core::{CardRect, Config, ConfigKey};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn card_rect(el: &web::Element) -> CardRect {
    let r = el.get_bounding_client_rect();
    CardRect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

fn attribute_for(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::MaxRotation => DATA_MAX_ROTATION,
        ConfigKey::IdleTimeoutMs => DATA_IDLE_TIMEOUT,
        ConfigKey::Smoothing => DATA_SMOOTHING,
        ConfigKey::SpringBack => DATA_SPRING_BACK,
        ConfigKey::GyroScale => DATA_GYRO_SCALE,
        ConfigKey::Strategy => DATA_STRATEGY,
    }
}

/// Engine config from the card's `data-*` attributes.
pub fn read_config(card: &web::Element) -> Config {
    Config::from_overrides(|key| card.get_attribute(attribute_for(key)))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    if let Err(e) = el.style().set_property(prop, value) {
        log::warn!("[dom] set {prop} failed: {:?}", e);
    }
}
