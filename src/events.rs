use crate::dom;
use holo_core::HoloEngine;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `event` on `target` for the life of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[events] could not listen for {event}: {:?}", e);
    }
    closure.forget();
}

/// Like [`listen`] but non-passive, so the handler may `prevent_default`.
pub fn listen_active<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[events] could not listen for {event}: {:?}", e);
    }
    closure.forget();
}

pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub card: web::HtmlElement,
    pub engine: Rc<RefCell<HoloEngine>>,
    pub origin: Instant,
}

/// Refresh the cached card bounds if a resize/scroll dropped them.
#[inline]
fn ensure_rect(engine: &mut HoloEngine, card: &web::HtmlElement) {
    if engine.needs_rect() {
        engine.set_card_rect(dom::card_rect(card));
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    let doc: &web::EventTarget = w.document.as_ref();
    let win: &web::EventTarget = w.window.as_ref();

    // mousemove
    {
        let engine = w.engine.clone();
        let card = w.card.clone();
        let origin = w.origin;
        listen(doc, "mousemove", move |ev: web::MouseEvent| {
            let mut eng = engine.borrow_mut();
            ensure_rect(&mut eng, &card);
            eng.handle_pointer_input(ev.client_x() as f32, ev.client_y() as f32, origin.elapsed());
        });
    }

    // mouseleave
    {
        let engine = w.engine.clone();
        listen(doc, "mouseleave", move |_: web::MouseEvent| {
            engine.borrow_mut().handle_pointer_leave();
        });
    }

    // touchmove (non-passive: the page must not scroll while tilting)
    {
        let engine = w.engine.clone();
        let card = w.card.clone();
        let origin = w.origin;
        listen_active(doc, "touchmove", move |ev: web::TouchEvent| {
            ev.prevent_default();
            let Some(t) = ev.touches().get(0) else {
                return;
            };
            let mut eng = engine.borrow_mut();
            ensure_rect(&mut eng, &card);
            eng.handle_touch_input(t.client_x() as f32, t.client_y() as f32, origin.elapsed());
        });
    }

    // touchend
    {
        let engine = w.engine.clone();
        listen(doc, "touchend", move |_: web::TouchEvent| {
            engine.borrow_mut().handle_touch_end();
        });
    }

    // deviceorientation (permission, where required, is negotiated by the page)
    {
        let engine = w.engine.clone();
        let origin = w.origin;
        listen(win, "deviceorientation", move |ev: web::DeviceOrientationEvent| {
            let beta = ev.beta().map(|v| v as f32);
            let gamma = ev.gamma().map(|v| v as f32);
            engine
                .borrow_mut()
                .handle_orientation_input(beta, gamma, origin.elapsed());
        });
    }

    // layout changes invalidate the cached bounds
    for event in ["resize", "scroll"] {
        let engine = w.engine.clone();
        listen(win, event, move |_: web::Event| {
            engine.borrow_mut().invalidate_rect();
        });
    }
}
