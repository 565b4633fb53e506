use std::f64::consts::TAU;

// Curve generation and timing constants shared by the engine modules.

// Sampling
pub const SAMPLES_PER_REVOLUTION: usize = 360; // polyline vertices per curve
pub const FULL_TURN: f64 = TAU;

// Harmonic layout: fundamental plus two overtones at a fixed 1:2:4 ratio
pub const HARMONIC_RATIOS: [u32; 3] = [1, 2, 4];

// Contribution of each harmonic to the wobble amplitude (fundamental dominates)
pub const HARMONIC_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

// Angular velocity of each harmonic against simulation time (radians per second)
pub const HARMONIC_TIME_RATES: [f64; 3] = [2.0, -1.5, 0.8];

// Third-harmonic decorrelation per curve when per-curve frequencies are off
pub const LEGACY_PHASE3_STEP: f64 = 1.3;

// Coprime step search order, reduced modulo the curve count
pub const COPRIME_STEP_PREFERENCE: [u32; 8] = [7, 11, 13, 17, 19, 5, 3, 2];

// Phase hash seed layout: base * 100_000 + count * 1_000 + index + component
pub const PHASE_SEED_BASE_MUL: u32 = 100_000;
pub const PHASE_SEED_COUNT_MUL: u32 = 1_000;

// Integer mix constants (odd multipliers)
pub const PHASE_MIX_MUL_A: u32 = 0x7feb_352d;
pub const PHASE_MIX_MUL_B: u32 = 0x846c_a68b;
pub const PHASE_HASH_SCALE: f64 = 4_294_967_296.0; // 2^32

// Setting ranges
pub const SPEED_MAX: f64 = 10.0;
pub const WOBBLE_AMOUNT_MAX: f64 = 200.0;
pub const WOBBLE_FREQUENCY_MIN: f64 = 1.0;
pub const WOBBLE_FREQUENCY_MAX: f64 = 30.0;
pub const RADIUS_SCALE_MIN: f64 = 0.1;
pub const RADIUS_SCALE_MAX: f64 = 0.95;
pub const LINE_WIDTH_MAX: f64 = 20.0;
pub const CIRCLE_COUNT_MIN: u32 = 1;
pub const CIRCLE_COUNT_MAX: u32 = 20;
pub const RADIUS_STEP_MAX: f64 = 180.0;
pub const MOUSE_OFFSET_MAX: f64 = 500.0;
pub const TARGET_FPS_MIN: u32 = 1;
pub const TARGET_FPS_MAX: u32 = 120;

pub const DEFAULT_TARGET_FPS: u32 = 60;

// Stroke colour; only alpha varies per curve
pub const STROKE_RGB: [u8; 3] = [255, 255, 255];
