//! Sampling Timer Constants
//!
//! The sampling driver runs a timer in clear-on-compare mode; every compare
//! match starts one conversion. The sample period is therefore
//! `prescaler × (ticks + 1)` CPU cycles.

/// Default timer clock divider (Fcpu / 64).
pub const DEFAULT_TIMER_PRESCALER: u16 = 64;

/// Default compare value.
///
/// At 16 MHz / 64 this gives 250 kHz / 250 = 1 kHz sampling.
pub const DEFAULT_SAMPLE_TICKS: u16 = 249;
