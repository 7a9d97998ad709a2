use crate::dom;
use crate::style;
use holo_core::{HoloEngine, VisualParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<HoloEngine>>,
    pub card: web::HtmlElement,
    /// Front and (optional) back pattern layers.
    pub patterns: Vec<web::HtmlElement>,
    pub origin: Instant,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.origin.elapsed();
        let params = self.engine.borrow_mut().frame(now);
        if let Some(p) = params {
            apply_params(&self.card, &self.patterns, &p);
        }
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!("[frame] {} frames, mode {:?}", self.frames, self.engine.borrow().mode());
        }
    }
}

pub fn apply_params(card: &web::HtmlElement, patterns: &[web::HtmlElement], p: &VisualParams) {
    for (name, value) in style::style_vars(p) {
        dom::set_style(card, name, &value);
    }
    let pos = style::pattern_background_position(p.rainbow_pos);
    for el in patterns {
        dom::set_style(el, "background-position", &pos);
    }
}

/// Run `frame_ctx.frame()` on every animation frame for the life of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
