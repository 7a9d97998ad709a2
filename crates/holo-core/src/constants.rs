// Shared motion/visual tuning constants used by both web and native frontends.

// Motion defaults
pub const DEFAULT_MAX_ROTATION_DEG: f32 = 12.0; // peak tilt on either axis
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 3000; // silence before the card recenters
pub const DEFAULT_SMOOTHING: f32 = 0.12; // per-frame blend while input is active
pub const DEFAULT_SPRING_BACK: f32 = 0.06; // per-frame blend while returning to rest
pub const DEFAULT_GYRO_SCALE: f32 = 1.0;

// Device orientation
pub const GYRO_BETA_REST_DEG: f32 = 30.0; // a phone held naturally reads as flat
pub const GYRO_GLARE_SPAN_PCT: f32 = 40.0; // glare travel from center at full tilt

// Neutral pose
pub const GLARE_CENTER_PCT: f32 = 50.0;

// Derived parameter spans
pub const BACKGROUND_SPAN_PCT: f32 = 30.0;
pub const RAINBOW_BASE_ANGLE_DEG: f32 = 135.0;
pub const RAINBOW_ANGLE_SPAN_DEG: f32 = 30.0;
pub const RAINBOW_POS_SPAN_PCT: f32 = 30.0;
pub const PATTERN_OFFSET_PCT: f32 = 10.0; // pattern layer leads the rainbow position

// Per-layer opacity coefficients applied to tilt intensity
pub const GLARE_OPACITY_SCALE: f32 = 0.85;
pub const HOLO_OPACITY_SCALE: f32 = 0.7;
pub const SPARKLE_OPACITY_SCALE: f32 = 0.5;

// Output rounding (decimal places)
pub const ROUND_PLACES: i32 = 3;
pub const FRACTION_ROUND_PLACES: i32 = 4; // pointer-from-* fractions

// Frame pacing
pub const REFERENCE_FPS: f32 = 60.0; // smoothing factors are defined per frame at this rate
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // cap after a stalled/backgrounded frame

// Editor
pub const LAYER_Z_STEP: i32 = 10;
