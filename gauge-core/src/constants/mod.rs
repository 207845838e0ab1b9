//! Constants for Gauge Core
//!
//! Centralised numeric defaults for the acquisition chain. Every value that
//! configures hardware or sizes a fixed-capacity structure lives here rather
//! than as a magic number at the use site.
//!
//! ## Organization
//!
//! - **Buffers**: subscriber slot counts, window and history sizes
//! - **Sensors**: ADC characteristics and pressure transducer transfer curve
//! - **Time**: sampling timer parameters

/// Registry capacities and default window/history sizes.
pub mod buffers;

/// ADC characteristics and the default pressure transducer curve.
pub mod sensors;

/// Sampling timer parameters.
pub mod time;

pub use buffers::{
    DEFAULT_IMMEDIATE_SUBSCRIBERS, DEFAULT_DEFERRED_SUBSCRIBERS,
    DEFAULT_WINDOW_SIZE, DEFAULT_HISTORY_SIZE,
};

pub use sensors::{
    ADC_RESOLUTION_COUNTS, ADC_REFERENCE_VOLTS, MAX_ADC_CHANNEL,
};

pub use time::{
    DEFAULT_TIMER_PRESCALER, DEFAULT_SAMPLE_TICKS,
};
