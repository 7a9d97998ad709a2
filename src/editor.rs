// Editor panel glue: tilt toggle, card flip, holo type buttons, panel
// collapse, masks, blend-mode selects and layer reordering. Layer decisions
// live in holo_core::LayerStack; this only moves DOM nodes and writes styles.

use crate::constants::*;
use crate::dom;
use crate::events::listen;
use crate::style;
use holo_core::{BlendMode, DropSide, HoloEngine, Layer, LayerStack};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_tilt_toggle(document: &web::Document, engine: Rc<RefCell<HoloEngine>>) {
    let Some(toggle) = document.get_element_by_id(TILT_TOGGLE_ID) else {
        return;
    };
    let btn = toggle.clone();
    dom::add_click_listener(document, TILT_TOGGLE_ID, move || {
        let enabled = {
            let mut eng = engine.borrow_mut();
            let enabled = !eng.tilt_enabled();
            eng.set_tilt_enabled(enabled);
            enabled
        };
        let _ = btn.class_list().toggle_with_force(ACTIVE_CLASS, enabled);
        if let Ok(Some(label)) = btn.query_selector(".toggle-text") {
            label.set_text_content(Some(if enabled { "on" } else { "off" }));
        }
    });
}

pub fn wire_flip(document: &web::Document, card: &web::HtmlElement) {
    let card = card.clone();
    dom::add_click_listener(document, CARD_ROTATOR_ID, move || {
        let _ = card.class_list().toggle(FLIPPED_CLASS);
    });
}

pub fn wire_collapse(document: &web::Document) {
    let (Ok(Some(header)), Some(editor)) = (
        document.query_selector(EDITOR_HEADER_SELECTOR),
        document.get_element_by_id(EDITOR_ID),
    ) else {
        return;
    };
    let target: &web::EventTarget = header.as_ref();
    listen(target, "click", move |_: web::MouseEvent| {
        let _ = editor.class_list().toggle(COLLAPSED_CLASS);
    });
}

fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Holo type buttons: the clicked one becomes active and its `data-rarity`
/// is copied onto the card, where the stylesheet picks the effect.
pub fn wire_rarity(document: &web::Document, card: &web::HtmlElement) {
    let buttons = Rc::new(query_all(document, HOLO_BUTTON_SELECTOR));
    for btn in buttons.iter() {
        let all = buttons.clone();
        let this = btn.clone();
        let card = card.clone();
        let target: &web::EventTarget = btn.as_ref();
        listen(target, "click", move |_: web::MouseEvent| {
            for b in all.iter() {
                let _ = b.class_list().remove_1(ACTIVE_CLASS);
            }
            let _ = this.class_list().add_1(ACTIVE_CLASS);
            if let Some(rarity) = this.get_attribute(DATA_RARITY) {
                if let Err(e) = card.set_attribute(DATA_RARITY, &rarity) {
                    log::warn!("[editor] set rarity failed: {:?}", e);
                }
            }
        });
    }
}

/// Front and back mask artwork: image sources plus the CSS mask variables.
/// URLs come from the card's `data-mask` / `data-back-mask`, else defaults.
pub fn apply_masks(document: &web::Document, card: &web::HtmlElement) {
    let front = card
        .get_attribute(DATA_MASK)
        .unwrap_or_else(|| DEFAULT_MASK_URL.to_string());
    let back = card
        .get_attribute(DATA_BACK_MASK)
        .unwrap_or_else(|| DEFAULT_BACK_MASK_URL.to_string());
    for (img_id, var, url) in [
        (CARD_MASK_ID, VAR_MASK, &front),
        (CARD_BACK_MASK_ID, VAR_BACK_MASK, &back),
    ] {
        if let Some(img) = document.get_element_by_id(img_id) {
            let _ = img.set_attribute("src", url);
        }
        dom::set_style(card, var, &style::css_url(url));
    }
    let _ = card.class_list().add_1(MASKED_CLASS);
    log::debug!("[editor] masks {front} / {back}");
}

fn layer_elements(document: &web::Document, layer: Layer) -> Vec<web::HtmlElement> {
    let ids: &[&str] = match layer {
        Layer::Holo => &[CARD_SHINE_ID, CARD_GLARE_ID],
        Layer::Pattern => &[CARD_PATTERN_ID],
        Layer::Mask => &[CARD_MASK_ID],
    };
    ids.iter().filter_map(|id| dom::html_by_id(document, id)).collect()
}

pub fn apply_blend(document: &web::Document, layer: Layer, mode: BlendMode) {
    for el in layer_elements(document, layer) {
        dom::set_style(&el, "mix-blend-mode", mode.as_css());
    }
}

pub fn apply_z_indices(document: &web::Document, stack: &LayerStack) {
    for (layer, z) in stack.z_indices() {
        let z = z.to_string();
        for el in layer_elements(document, layer) {
            dom::set_style(&el, "z-index", &z);
        }
        let label = LAYER_Z_LABEL_IDS
            .iter()
            .find(|(name, _)| *name == layer.as_str())
            .and_then(|(_, id)| document.get_element_by_id(id));
        if let Some(label) = label {
            label.set_text_content(Some(&z));
        }
    }
}

pub fn wire_blend_selects(document: &web::Document, stack: Rc<RefCell<LayerStack>>) {
    for (select_id, layer_name) in BLEND_SELECTS {
        let Ok(layer) = layer_name.parse::<Layer>() else {
            continue;
        };
        apply_blend(document, layer, stack.borrow().blend(layer));
        let Some(select) = document
            .get_element_by_id(select_id)
            .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
        else {
            continue;
        };
        select.set_value(stack.borrow().blend(layer).as_css());
        let doc = document.clone();
        let stack = stack.clone();
        let sel = select.clone();
        let select_target: &web::EventTarget = select.as_ref();
        listen(select_target, "change", move |_: web::Event| {
            match sel.value().parse::<BlendMode>() {
                Ok(mode) => {
                    stack.borrow_mut().set_blend(layer, mode);
                    apply_blend(&doc, layer, mode);
                }
                Err(e) => log::warn!("[editor] {e}"),
            }
        });
    }
}

fn layer_item(target: Option<web::EventTarget>) -> Option<web::Element> {
    target?
        .dyn_into::<web::Element>()
        .ok()?
        .closest(LAYER_ITEM_SELECTOR)
        .ok()
        .flatten()
}

fn item_layer(item: &web::Element) -> Option<Layer> {
    item.get_attribute("data-layer")?.parse().ok()
}

/// Drag-to-reorder on the layer list. The stack is rebuilt from the DOM
/// order at startup so markup and model agree.
pub fn wire_layer_drag(document: &web::Document, stack: Rc<RefCell<LayerStack>>) {
    let Some(list) = document.get_element_by_id(LAYER_LIST_ID) else {
        apply_z_indices(document, &stack.borrow());
        return;
    };
    if let Ok(items) = list.query_selector_all(LAYER_ITEM_SELECTOR) {
        let order: Vec<Layer> = (0..items.length())
            .filter_map(|i| items.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .filter_map(|el| item_layer(&el))
            .collect();
        let blends = Layer::ALL.map(|l| stack.borrow().blend(l));
        let mut rebuilt = LayerStack::from_order(&order);
        for (l, m) in Layer::ALL.into_iter().zip(blends) {
            rebuilt.set_blend(l, m);
        }
        *stack.borrow_mut() = rebuilt;
    }
    apply_z_indices(document, &stack.borrow());

    let dragging: Rc<RefCell<Option<web::Element>>> = Rc::new(RefCell::new(None));
    let target: &web::EventTarget = list.as_ref();

    {
        let dragging = dragging.clone();
        listen(target, "dragstart", move |ev: web::DragEvent| {
            if let Some(item) = layer_item(ev.target()) {
                let _ = item.class_list().add_1(DRAGGING_CLASS);
                *dragging.borrow_mut() = Some(item);
            }
        });
    }

    {
        let dragging = dragging.clone();
        let stack = stack.clone();
        let list = list.clone();
        listen(target, "dragover", move |ev: web::DragEvent| {
            ev.prevent_default();
            let drag_ref = dragging.borrow();
            let (Some(dragged), Some(over)) = (drag_ref.as_ref(), layer_item(ev.target())) else {
                return;
            };
            if over.is_same_node(Some(dragged.as_ref())) {
                return;
            }
            let (Some(dragged_layer), Some(over_layer)) = (item_layer(dragged), item_layer(&over)) else {
                return;
            };
            let rect = over.get_bounding_client_rect();
            let side = DropSide::from_pointer(ev.client_y() as f32, rect.top() as f32, rect.height() as f32);
            if !stack.borrow_mut().move_relative(dragged_layer, over_layer, side) {
                return;
            }
            let anchor = match side {
                DropSide::Before => Some(over.clone().unchecked_into::<web::Node>()),
                DropSide::After => over.next_sibling(),
            };
            if let Err(e) = list.insert_before(dragged, anchor.as_ref()) {
                log::warn!("[editor] reorder failed: {:?}", e);
            }
        });
    }

    {
        let doc = document.clone();
        listen(target, "dragend", move |_: web::DragEvent| {
            if let Some(item) = dragging.borrow_mut().take() {
                let _ = item.class_list().remove_1(DRAGGING_CLASS);
            }
            apply_z_indices(&doc, &stack.borrow());
        });
    }
}
