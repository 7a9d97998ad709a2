// Host-side tests for the editor layer stack and blend modes.

use holo_core::*;

#[test]
fn default_order_and_z_indices() {
    let stack = LayerStack::default();
    assert_eq!(stack.order(), &[Layer::Holo, Layer::Pattern, Layer::Mask]);
    assert_eq!(stack.z_index(Layer::Holo), Some(30));
    assert_eq!(stack.z_index(Layer::Pattern), Some(20));
    assert_eq!(stack.z_index(Layer::Mask), Some(10));
    let z: Vec<_> = stack.z_indices().into_iter().collect();
    assert_eq!(z, vec![(Layer::Holo, 30), (Layer::Pattern, 20), (Layer::Mask, 10)]);
}

#[test]
fn default_blends_match_editor_defaults() {
    let stack = LayerStack::default();
    assert_eq!(stack.blend(Layer::Mask), BlendMode::Overlay);
    assert_eq!(stack.blend(Layer::Pattern), BlendMode::ColorDodge);
    assert_eq!(stack.blend(Layer::Holo), BlendMode::ColorDodge);
}

#[test]
fn move_before_and_after() {
    let mut stack = LayerStack::default();
    assert!(stack.move_relative(Layer::Mask, Layer::Holo, DropSide::Before));
    assert_eq!(stack.order(), &[Layer::Mask, Layer::Holo, Layer::Pattern]);
    assert_eq!(stack.z_index(Layer::Mask), Some(30));

    assert!(stack.move_relative(Layer::Mask, Layer::Pattern, DropSide::After));
    assert_eq!(stack.order(), &[Layer::Holo, Layer::Pattern, Layer::Mask]);
}

#[test]
fn moves_that_change_nothing_report_false() {
    let mut stack = LayerStack::default();
    assert!(!stack.move_relative(Layer::Holo, Layer::Holo, DropSide::After));
    // already directly before Pattern
    assert!(!stack.move_relative(Layer::Holo, Layer::Pattern, DropSide::Before));
    assert_eq!(stack, LayerStack::default());
}

#[test]
fn drop_side_uses_vertical_midpoint() {
    assert_eq!(DropSide::from_pointer(104.0, 100.0, 10.0), DropSide::Before);
    assert_eq!(DropSide::from_pointer(105.0, 100.0, 10.0), DropSide::After);
    assert_eq!(DropSide::from_pointer(200.0, 100.0, 10.0), DropSide::After);
}

#[test]
fn from_order_fills_gaps_and_drops_duplicates() {
    let stack = LayerStack::from_order(&[Layer::Mask, Layer::Mask]);
    assert_eq!(stack.order(), &[Layer::Mask, Layer::Holo, Layer::Pattern]);
    assert_eq!(stack.z_index(Layer::Mask), Some(30));
}

#[test]
fn blend_modes_parse_and_render_css() {
    for mode in BlendMode::ALL {
        assert_eq!(mode.as_css().parse::<BlendMode>(), Ok(mode));
    }
    assert_eq!(" Color-Dodge ".parse::<BlendMode>(), Ok(BlendMode::ColorDodge));
    assert!("sparkly".parse::<BlendMode>().is_err());
    assert_eq!(BlendMode::HardLight.to_string(), "hard-light");
}

#[test]
fn set_blend_is_per_layer() {
    let mut stack = LayerStack::default();
    stack.set_blend(Layer::Pattern, BlendMode::Screen);
    assert_eq!(stack.blend(Layer::Pattern), BlendMode::Screen);
    assert_eq!(stack.blend(Layer::Holo), BlendMode::ColorDodge);
}

#[test]
fn layer_names() {
    assert_eq!("holo".parse::<Layer>(), Ok(Layer::Holo));
    assert_eq!("mask".parse::<Layer>(), Ok(Layer::Mask));
    assert!("glare".parse::<Layer>().is_err());
}
