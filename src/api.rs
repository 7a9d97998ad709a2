// Script-facing wrapper so pages can drive an engine with their own event
// wiring (or none at all) instead of the built-in #card bindings.

use crate::style;
use holo_core::{clock_from_millis, CardRect, Config, HoloEngine, SmoothingStrategy, VisualParams};
use js_sys::{Object, Reflect};
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[inline]
fn ms(now_ms: f64) -> Duration {
    clock_from_millis(now_ms)
}

fn set(obj: &Object, key: &str, value: JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), &value);
}

fn params_object(p: &VisualParams) -> Object {
    let obj = Object::new();
    let fields: [(&str, f32); 15] = [
        ("rotateX", p.rotate_x),
        ("rotateY", p.rotate_y),
        ("pointerX", p.pointer_x),
        ("pointerY", p.pointer_y),
        ("fromLeft", p.from_left),
        ("fromTop", p.from_top),
        ("fromCenter", p.from_center),
        ("backgroundX", p.background_x),
        ("backgroundY", p.background_y),
        ("intensity", p.intensity),
        ("glareOpacity", p.glare_opacity),
        ("holoOpacity", p.holo_opacity),
        ("sparkleOpacity", p.sparkle_opacity),
        ("rainbowAngle", p.rainbow_angle),
        ("rainbowPos", p.rainbow_pos),
    ];
    for (key, value) in fields {
        set(&obj, key, JsValue::from_f64(value as f64));
    }
    obj
}

#[wasm_bindgen]
pub struct HoloCard {
    engine: HoloEngine,
}

#[wasm_bindgen]
impl HoloCard {
    /// All arguments are optional; omitted ones keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        max_rotation: Option<f32>,
        idle_timeout_ms: Option<u32>,
        strategy: Option<String>,
        smoothing: Option<f32>,
        spring_back: Option<f32>,
        gyro_scale: Option<f32>,
    ) -> Result<HoloCard, JsError> {
        let mut config = Config::default();
        if let Some(deg) = max_rotation {
            config = config.with_max_rotation(deg);
        }
        if let Some(t) = idle_timeout_ms {
            config = config.with_idle_timeout(Duration::from_millis(t as u64));
        }
        if let Some(s) = strategy {
            config = config.with_strategy(s.parse::<SmoothingStrategy>()?);
        }
        if let Some(f) = smoothing {
            config = config.with_smoothing(f);
        }
        if let Some(f) = spring_back {
            config = config.with_spring_back(f);
        }
        if let Some(g) = gyro_scale {
            config = config.with_gyro_scale(g);
        }
        let engine = HoloEngine::new(config)?;
        Ok(HoloCard { engine })
    }

    #[wasm_bindgen(js_name = handlePointerInput)]
    pub fn handle_pointer_input(&mut self, x: f32, y: f32, now_ms: f64) {
        self.engine.handle_pointer_input(x, y, ms(now_ms));
    }

    #[wasm_bindgen(js_name = handleTouchInput)]
    pub fn handle_touch_input(&mut self, x: f32, y: f32, now_ms: f64) {
        self.engine.handle_touch_input(x, y, ms(now_ms));
    }

    #[wasm_bindgen(js_name = handleOrientationInput)]
    pub fn handle_orientation_input(&mut self, beta: Option<f32>, gamma: Option<f32>, now_ms: f64) {
        self.engine.handle_orientation_input(beta, gamma, ms(now_ms));
    }

    #[wasm_bindgen(js_name = handlePointerLeave)]
    pub fn handle_pointer_leave(&mut self) {
        self.engine.handle_pointer_leave();
    }

    #[wasm_bindgen(js_name = handleTouchEnd)]
    pub fn handle_touch_end(&mut self) {
        self.engine.handle_touch_end();
    }

    #[wasm_bindgen(js_name = setTiltEnabled)]
    pub fn set_tilt_enabled(&mut self, enabled: bool) {
        self.engine.set_tilt_enabled(enabled);
    }

    #[wasm_bindgen(js_name = setCardRect)]
    pub fn set_card_rect(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.engine.set_card_rect(CardRect::new(left, top, width, height));
    }

    #[wasm_bindgen(js_name = invalidateRect)]
    pub fn invalidate_rect(&mut self) {
        self.engine.invalidate_rect();
    }

    #[wasm_bindgen(js_name = needsRect)]
    pub fn needs_rect(&self) -> bool {
        self.engine.needs_rect()
    }

    #[wasm_bindgen(js_name = resetToCenter)]
    pub fn reset_to_center(&mut self) {
        self.engine.reset_to_center();
    }

    /// Advance to `nowMs`; returns true when the parameters changed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.engine.frame(ms(now_ms)).is_some()
    }

    #[wasm_bindgen(js_name = visualParams)]
    pub fn visual_params(&self) -> Object {
        params_object(&self.engine.visual_params())
    }

    /// CSS custom properties (`--rotate-x` etc.) ready for `style.setProperty`.
    #[wasm_bindgen(js_name = styleVars)]
    pub fn style_vars(&self) -> Object {
        let params = self.engine.visual_params();
        let obj = Object::new();
        for (name, value) in style::style_vars(&params) {
            set(&obj, name, JsValue::from_str(&value));
        }
        set(
            &obj,
            "patternBackgroundPosition",
            JsValue::from_str(&style::pattern_background_position(params.rainbow_pos)),
        );
        obj
    }
}
