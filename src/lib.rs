#![cfg(target_arch = "wasm32")]
use holo_core::{HoloEngine, LayerStack};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod api;
mod constants;
mod dom;
mod editor;
mod events;
mod frame;
mod style;

pub use api::HoloCard;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("holo-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Pages without the card markup only use the exported HoloCard class
    let Some(card) = dom::html_by_id(&document, constants::CARD_ID) else {
        log::info!("no #{} element; automatic wiring skipped", constants::CARD_ID);
        return Ok(());
    };

    let config = dom::read_config(&card);
    log::info!(
        "[config] max_rotation={} idle_timeout={:?} strategy={:?}",
        config.max_rotation,
        config.idle_timeout,
        config.strategy
    );
    let mut engine = HoloEngine::new(config)?;
    engine.set_card_rect(dom::card_rect(&card));
    let engine = Rc::new(RefCell::new(engine));
    let origin = Instant::now();

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        card: card.clone(),
        engine: engine.clone(),
        origin,
    });

    let layers = Rc::new(RefCell::new(LayerStack::default()));
    editor::wire_tilt_toggle(&document, engine.clone());
    editor::wire_flip(&document, &card);
    editor::wire_rarity(&document, &card);
    editor::wire_collapse(&document);
    editor::apply_masks(&document, &card);
    editor::wire_blend_selects(&document, layers.clone());
    editor::wire_layer_drag(&document, layers);

    let patterns = [constants::CARD_PATTERN_ID, constants::CARD_BACK_PATTERN_ID]
        .iter()
        .filter_map(|id| dom::html_by_id(&document, id))
        .collect();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        card,
        patterns,
        origin,
        frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
