//! Buffer Sizes and Registry Capacities
//!
//! Fixed capacities for structures that must never allocate. All of them
//! can be overridden through const generics; these are the values the
//! convenience constructors use.

// ===== SUBSCRIBER REGISTRIES =====

/// Immediate (interrupt-context) subscriber slots.
///
/// Immediate subscribers run inside the sampling interrupt, so every extra
/// slot adds latency to the handler. One slot covers the usual case of a
/// single fast consumer such as a threshold trip.
pub const DEFAULT_IMMEDIATE_SUBSCRIBERS: usize = 1;

/// Deferred (main-loop) subscriber slots.
///
/// Deferred subscribers run from `poll()` where time is cheap. Five slots
/// cover display, logging, history and a couple of application consumers.
pub const DEFAULT_DEFERRED_SUBSCRIBERS: usize = 5;

// ===== AVERAGING =====

/// Default number of raw samples collapsed into one measurement.
///
/// 16 samples at the default ~1 kHz sample rate gives roughly 60
/// measurements per second, with 4x noise reduction on uncorrelated
/// ADC noise.
pub const DEFAULT_WINDOW_SIZE: u16 = 16;

// ===== HISTORY =====

/// Default history depth in measurements.
///
/// 64 slots × 2 bytes = 128 bytes for `u16` measurements. A power of two
/// keeps the cursor modulo a mask operation.
pub const DEFAULT_HISTORY_SIZE: usize = 64;
