// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use holo_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_within_reasonable_bounds() {
    assert!(DEFAULT_MAX_ROTATION_DEG > 0.0 && DEFAULT_MAX_ROTATION_DEG < 90.0);
    assert!(DEFAULT_IDLE_TIMEOUT_MS > 0);
    assert!(DEFAULT_SMOOTHING > 0.0 && DEFAULT_SMOOTHING <= 1.0);
    assert!(DEFAULT_SPRING_BACK > 0.0 && DEFAULT_SPRING_BACK <= 1.0);
    // returning to rest is gentler than following the pointer
    assert!(DEFAULT_SPRING_BACK <= DEFAULT_SMOOTHING);
    assert!(MAX_FRAME_DT_SEC > 1.0 / REFERENCE_FPS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_spans_stay_inside_percent_range() {
    for scale in [GLARE_OPACITY_SCALE, HOLO_OPACITY_SCALE, SPARKLE_OPACITY_SCALE] {
        assert!(scale > 0.0 && scale <= 1.0);
    }
    assert!(GLARE_CENTER_PCT + GYRO_GLARE_SPAN_PCT <= 100.0);
    assert!(GLARE_CENTER_PCT + BACKGROUND_SPAN_PCT <= 100.0);
    assert!(GLARE_CENTER_PCT + RAINBOW_POS_SPAN_PCT <= 100.0);
}

#[test]
fn web_ids_are_unique() {
    let mut ids = vec![
        CARD_ID,
        CARD_ROTATOR_ID,
        CARD_PATTERN_ID,
        CARD_BACK_PATTERN_ID,
        CARD_SHINE_ID,
        CARD_GLARE_ID,
        CARD_MASK_ID,
        CARD_BACK_MASK_ID,
        EDITOR_ID,
        TILT_TOGGLE_ID,
        LAYER_LIST_ID,
    ];
    ids.extend(BLEND_SELECTS.iter().map(|(id, _)| *id));
    ids.extend(LAYER_Z_LABEL_IDS.iter().map(|(_, id)| *id));
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
}

#[test]
fn editor_layer_names_parse() {
    for (_, name) in BLEND_SELECTS {
        assert!(name.parse::<Layer>().is_ok(), "{name}");
    }
    for (name, _) in LAYER_Z_LABEL_IDS {
        assert!(name.parse::<Layer>().is_ok(), "{name}");
    }
}

#[test]
fn data_attributes_cover_every_config_key() {
    let attrs = [
        DATA_MAX_ROTATION,
        DATA_IDLE_TIMEOUT,
        DATA_SMOOTHING,
        DATA_SPRING_BACK,
        DATA_GYRO_SCALE,
        DATA_STRATEGY,
    ];
    assert_eq!(attrs.len(), ConfigKey::ALL.len());
    assert!(attrs.iter().all(|a| a.starts_with("data-")));
}

#[test]
fn editor_hooks_are_well_formed() {
    for selector in [LAYER_ITEM_SELECTOR, EDITOR_HEADER_SELECTOR, HOLO_BUTTON_SELECTOR] {
        assert!(selector.starts_with('.'), "{selector}");
    }
    for class in [FLIPPED_CLASS, ACTIVE_CLASS, DRAGGING_CLASS, COLLAPSED_CLASS, MASKED_CLASS] {
        assert!(!class.is_empty() && !class.contains(' '), "{class}");
    }
    for attr in [DATA_RARITY, DATA_MASK, DATA_BACK_MASK] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
    assert_ne!(DEFAULT_MASK_URL, DEFAULT_BACK_MASK_URL);
}

#[test]
fn mask_variables_are_separate_from_frame_variables() {
    let frame_vars = [
        VAR_ROTATE_X,
        VAR_ROTATE_Y,
        VAR_POINTER_X,
        VAR_POINTER_Y,
        VAR_FROM_LEFT,
        VAR_FROM_TOP,
        VAR_FROM_CENTER,
        VAR_BACKGROUND_X,
        VAR_BACKGROUND_Y,
        VAR_CARD_OPACITY,
        VAR_GLARE_OPACITY,
        VAR_HOLO_OPACITY,
        VAR_SPARKLE_OPACITY,
        VAR_RAINBOW_ANGLE,
        VAR_RAINBOW_POS,
    ];
    assert_eq!(frame_vars.len(), STYLE_VAR_COUNT);
    for var in [VAR_MASK, VAR_BACK_MASK] {
        assert!(var.starts_with("--"));
        assert!(!frame_vars.contains(&var));
    }
}
