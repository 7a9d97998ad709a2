// Host-side tests for frame smoothing and update coalescing.

use holo_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn at(frame: u32) -> Duration {
    FRAME * frame
}

#[test]
fn frame_alpha_matches_factor_at_reference_rate() {
    let a = frame_alpha(0.12, 1.0 / REFERENCE_FPS);
    assert!((a - 0.12).abs() < 1e-5);
    assert_eq!(frame_alpha(1.0, 1.0 / REFERENCE_FPS), 1.0);
    assert_eq!(frame_alpha(0.5, 0.0), 0.0);
}

#[test]
fn frame_alpha_composes_across_split_frames() {
    let half = 0.5 / REFERENCE_FPS;
    let a_half = frame_alpha(0.2, half);
    let two_halves = 1.0 - (1.0 - a_half) * (1.0 - a_half);
    assert!((two_halves - 0.2).abs() < 1e-5);
}

#[test]
fn frame_alpha_caps_long_stalls() {
    let capped = frame_alpha(0.05, 10.0);
    let max = frame_alpha(0.05, MAX_FRAME_DT_SEC);
    assert_eq!(capped, max);
    assert!(capped < 1.0);
}

#[test]
fn direct_mode_emits_only_when_requested() {
    let mut s = Smoother::new(SmoothingStrategy::Direct);
    let target = MotionState::new(5.0, -3.0, 20.0, 70.0);
    // initial paint
    assert_eq!(s.advance(&MotionState::CENTERED, 0.1, at(0)), Some(MotionState::CENTERED));
    assert_eq!(s.advance(&target, 0.1, at(1)), None);
    s.request_update();
    assert_eq!(s.advance(&target, 0.1, at(2)), Some(target));
    assert_eq!(s.advance(&target, 0.1, at(3)), None);
}

#[test]
fn direct_mode_coalesces_to_latest_target() {
    let mut s = Smoother::new(SmoothingStrategy::Direct);
    s.advance(&MotionState::CENTERED, 0.1, at(0));
    // several inputs between two frames schedule a single update
    s.request_update();
    s.request_update();
    s.request_update();
    let latest = MotionState::new(-2.0, 4.0, 60.0, 40.0);
    assert_eq!(s.advance(&latest, 0.1, at(1)), Some(latest));
    assert!(!s.has_pending());
    assert_eq!(s.advance(&latest, 0.1, at(2)), None);
}

#[test]
fn interpolation_moves_a_fraction_each_frame() {
    let mut s = Smoother::new(SmoothingStrategy::Interpolate);
    let target = MotionState::new(10.0, 0.0, 50.0, 50.0);
    let first = s.advance(&target, 0.25, at(0)).unwrap_or_default();
    assert!((first.rot_x() - 2.5).abs() < 1e-3);
    let second = s.advance(&target, 0.25, at(1)).unwrap_or_default();
    assert!((second.rot_x() - 4.375).abs() < 1e-2);
}

#[test]
fn interpolation_runs_even_when_settled() {
    let mut s = Smoother::new(SmoothingStrategy::Interpolate);
    for i in 0..5 {
        assert!(s.advance(&MotionState::CENTERED, 0.1, at(i)).is_some());
    }
}

#[test]
fn interpolation_converges_to_target() {
    let mut s = Smoother::new(SmoothingStrategy::Interpolate);
    let target = MotionState::new(-12.0, 12.0, 0.0, 100.0);
    for i in 0..600 {
        s.advance(&target, 0.06, at(i));
    }
    let cur = *s.current();
    assert!((cur.rotation - target.rotation).length() < 1e-3);
    assert!((cur.glare - target.glare).length() < 1e-3);
}
