// Host-side integration tests for the engine facade: input routing, idle
// return, preemption and the two display strategies.

use holo_core::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn engine(strategy: SmoothingStrategy) -> HoloEngine {
    let config = Config::default()
        .with_max_rotation(18.0)
        .with_idle_timeout(ms(3000))
        .with_strategy(strategy);
    let mut e = HoloEngine::new(config).expect("valid config");
    e.set_card_rect(CardRect::new(0.0, 0.0, 300.0, 400.0));
    e
}

#[test]
fn rejects_invalid_config() {
    let bad = Config::default().with_smoothing(0.0);
    assert!(matches!(
        HoloEngine::new(bad),
        Err(ConfigError::Factor { name: "smoothing", .. })
    ));
}

#[test]
fn pointer_input_sets_target_and_direct_frame_applies_it() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_pointer_input(0.0, 0.0, ms(0));
    assert_eq!(e.mode(), InteractionMode::PointerActive);
    assert_eq!(*e.target(), MotionState::new(18.0, -18.0, 0.0, 0.0));
    let p = e.frame(ms(16)).expect("pending update");
    assert_eq!(p.rotate_x, 18.0);
    assert_eq!(p.rotate_y, -18.0);
    assert_eq!(p.pointer_x, 0.0);
    assert_eq!(e.visual_params(), p);
    assert_eq!(e.frame(ms(32)), None);
}

#[test]
fn input_without_rect_is_ignored() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.invalidate_rect();
    assert!(e.needs_rect());
    e.handle_pointer_input(10.0, 10.0, ms(0));
    assert!(e.target().is_centered());
    assert_eq!(e.mode(), InteractionMode::Idle);

    e.set_card_rect(CardRect::new(0.0, 0.0, 0.0, 0.0));
    e.handle_touch_input(10.0, 10.0, ms(0));
    assert!(e.target().is_centered());
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_pointer_input(f32::NAN, 10.0, ms(0));
    e.handle_pointer_input(10.0, f32::INFINITY, ms(0));
    assert!(e.target().is_centered());
    assert_eq!(e.mode(), InteractionMode::Idle);
}

#[test]
fn extreme_inputs_stay_in_range() {
    let mut e = engine(SmoothingStrategy::Interpolate);
    for (i, (x, y)) in [(-1e9, 1e9), (1e9, -1e9), (150.0, -1e30)].into_iter().enumerate() {
        e.handle_pointer_input(x, y, ms(i as u64 * 16));
        let t = *e.target();
        assert!(t.rot_x().abs() <= 18.0 && t.rot_y().abs() <= 18.0);
        assert!((0.0..=100.0).contains(&t.glare_x()) && (0.0..=100.0).contains(&t.glare_y()));
        e.frame(ms(i as u64 * 16 + 8));
        let c = *e.current();
        assert!(c.rot_x().abs() <= 18.0 && c.rot_y().abs() <= 18.0);
    }
}

#[test]
fn orientation_is_ignored_while_pointer_active() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_pointer_input(300.0, 0.0, ms(0));
    let before = *e.target();
    e.handle_orientation_input(Some(80.0), Some(-40.0), ms(10));
    assert_eq!(*e.target(), before);
    assert_eq!(e.mode(), InteractionMode::PointerActive);
}

#[test]
fn orientation_drives_target_when_idle() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_orientation_input(Some(30.0), Some(9.0), ms(0));
    assert_eq!(e.mode(), InteractionMode::GyroActive);
    assert!((e.target().rot_y() - 9.0).abs() < 1e-4);
    assert!((e.target().glare_x() - 70.0).abs() < 1e-3);
}

#[test]
fn leave_recenters_immediately() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_pointer_input(10.0, 390.0, ms(0));
    e.frame(ms(16));
    e.handle_pointer_leave();
    assert!(e.target().is_centered());
    assert_eq!(e.mode(), InteractionMode::Idle);
    let p = e.frame(ms(32)).expect("recenter update");
    assert_eq!(p.rotate_x, 0.0);
    assert_eq!(p.pointer_y, 50.0);
}

#[test]
fn touch_end_behaves_like_leave() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_touch_input(250.0, 50.0, ms(0));
    e.handle_touch_end();
    assert!(e.target().is_centered());
    assert_eq!(e.mode(), InteractionMode::Idle);
}

#[test]
fn reset_is_idempotent() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_pointer_input(30.0, 60.0, ms(0));
    e.reset_to_center();
    let once = *e.target();
    e.reset_to_center();
    assert_eq!(*e.target(), once);
    assert!(once.is_centered());
}

#[test]
fn idle_timeout_returns_to_center_in_direct_mode() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_pointer_input(0.0, 0.0, ms(0));
    e.frame(ms(16));
    assert_eq!(e.frame(ms(2999)), None);
    let p = e.frame(ms(3000)).expect("idle recenter");
    assert_eq!(e.mode(), InteractionMode::Idle);
    assert!(e.current().is_centered());
    assert_eq!(p.intensity, 0.0);
}

#[test]
fn idle_timeout_converges_in_interpolating_mode() {
    let mut e = engine(SmoothingStrategy::Interpolate);
    e.handle_pointer_input(300.0, 400.0, ms(0));
    let mut t = 0;
    while t < 3000 {
        e.frame(ms(t));
        t += 16;
    }
    assert!(e.current().rotation.length() > 1.0, "should be tilted before timeout");
    while t < 8000 {
        e.frame(ms(t));
        t += 16;
    }
    assert!(e.target().is_centered());
    let c = *e.current();
    assert!(c.rotation.length() < 1e-2, "rotation {:?}", c.rotation);
    assert!((c.glare - MotionState::CENTERED.glare).length() < 1e-2);
}

#[test]
fn continuous_input_keeps_card_tilted() {
    let mut e = engine(SmoothingStrategy::Direct);
    for i in 0..10 {
        e.handle_pointer_input(0.0, 0.0, ms(i * 1000));
        e.frame(ms(i * 1000 + 1));
    }
    assert_eq!(e.mode(), InteractionMode::PointerActive);
    assert!(!e.target().is_centered());
}

#[test]
fn stale_gyro_timer_cannot_recenter_active_pointer() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_orientation_input(Some(50.0), Some(10.0), ms(0));
    e.handle_pointer_input(0.0, 0.0, ms(2000));
    // the gyro deadline would have been 3000
    e.frame(ms(3500));
    assert_eq!(e.mode(), InteractionMode::PointerActive);
    assert!(!e.target().is_centered());
}

#[test]
fn tilt_toggle_flattens_output_but_keeps_pose() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_pointer_input(0.0, 0.0, ms(0));
    e.frame(ms(16));
    e.set_tilt_enabled(false);
    let p = e.frame(ms(32)).expect("toggle repaint");
    assert_eq!(p.rotate_x, 0.0);
    assert_eq!(p.rotate_y, 0.0);
    assert!(p.intensity > 0.9);
    assert!(!e.target().is_centered());
    assert!(!e.tilt_enabled());
}

#[test]
fn first_frame_paints_neutral_pose() {
    let mut e = engine(SmoothingStrategy::Direct);
    let p = e.frame(ms(0)).expect("initial paint");
    assert_eq!(p, map_to_visual_params(&MotionState::CENTERED, true, 18.0));
}

#[test]
fn far_future_timestamps_do_not_panic() {
    let mut e = engine(SmoothingStrategy::Interpolate);
    e.handle_pointer_input(10.0, 10.0, Duration::MAX);
    assert_eq!(e.mode(), InteractionMode::PointerActive);
    e.handle_pointer_leave();
    e.handle_orientation_input(Some(45.0), Some(5.0), Duration::MAX);
    assert_eq!(e.mode(), InteractionMode::GyroActive);
    assert!(e.frame(Duration::MAX).is_some());
    e.handle_touch_input(20.0, 20.0, Duration::MAX);
    e.frame(Duration::MAX);
}

#[test]
fn host_millis_convert_to_clock() {
    assert_eq!(clock_from_millis(1500.0), ms(1500));
    assert_eq!(clock_from_millis(0.0), Duration::ZERO);
    assert_eq!(clock_from_millis(-20.0), Duration::ZERO);
    assert_eq!(clock_from_millis(f64::NAN), Duration::ZERO);
    assert_eq!(clock_from_millis(1e300), Duration::MAX);
    assert_eq!(clock_from_millis(f64::INFINITY), Duration::MAX);
}

#[test]
fn host_millis_past_range_still_drive_engine() {
    let mut e = engine(SmoothingStrategy::Direct);
    e.handle_pointer_input(0.0, 0.0, clock_from_millis(1e300));
    assert!(e.frame(clock_from_millis(1e300)).is_some());
}
