// CSS binding for VisualParams. Pure string formatting so it can be tested
// on the host without a DOM.

use crate::constants::*;
use holo_core::{VisualParams, PATTERN_OFFSET_PCT};
use smallvec::SmallVec;

pub type StyleVars = SmallVec<[(&'static str, String); STYLE_VAR_COUNT]>;

/// Shortest decimal form of an already-rounded value ("12", "0.5", "-3.25").
#[inline]
pub fn fmt_num(v: f32) -> String {
    if v == 0.0 || !v.is_finite() {
        // also folds -0
        return "0".to_string();
    }
    format!("{}", v)
}

#[inline]
fn deg(v: f32) -> String {
    format!("{}deg", fmt_num(v))
}

#[inline]
fn pct(v: f32) -> String {
    format!("{}%", fmt_num(v))
}

pub fn style_vars(p: &VisualParams) -> StyleVars {
    let mut vars = StyleVars::new();
    vars.push((VAR_ROTATE_X, deg(p.rotate_x)));
    vars.push((VAR_ROTATE_Y, deg(p.rotate_y)));
    vars.push((VAR_POINTER_X, pct(p.pointer_x)));
    vars.push((VAR_POINTER_Y, pct(p.pointer_y)));
    vars.push((VAR_FROM_LEFT, fmt_num(p.from_left)));
    vars.push((VAR_FROM_TOP, fmt_num(p.from_top)));
    vars.push((VAR_FROM_CENTER, fmt_num(p.from_center)));
    vars.push((VAR_BACKGROUND_X, pct(p.background_x)));
    vars.push((VAR_BACKGROUND_Y, pct(p.background_y)));
    vars.push((VAR_CARD_OPACITY, fmt_num(p.intensity)));
    vars.push((VAR_GLARE_OPACITY, fmt_num(p.glare_opacity)));
    vars.push((VAR_HOLO_OPACITY, fmt_num(p.holo_opacity)));
    vars.push((VAR_SPARKLE_OPACITY, fmt_num(p.sparkle_opacity)));
    vars.push((VAR_RAINBOW_ANGLE, deg(p.rainbow_angle)));
    vars.push((VAR_RAINBOW_POS, pct(p.rainbow_pos)));
    vars
}

/// `background-position` for the pattern layers: the texture leads the
/// rainbow scroll by a fixed offset, the second (gradient) layer stays put.
pub fn pattern_background_position(rainbow_pos: f32) -> String {
    let pos = fmt_num(rainbow_pos);
    let offset = fmt_num(PATTERN_OFFSET_PCT);
    format!("calc({pos}% + {offset}%) calc({pos}% + {offset}%), center")
}

/// CSS `url()` for a mask image; quotes and backslashes are escaped.
pub fn css_url(url: &str) -> String {
    let escaped = url.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{escaped}\")")
}
