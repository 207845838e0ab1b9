//! Core measurement pipeline for gauge firmware
//!
//! Turns raw ADC readings into averaged measurements, hands them across the
//! interrupt/main-loop boundary, and tracks recent extrema for display.
//! Designed for small microcontrollers.
//!
//! Key constraints:
//! - Runs in a few hundred bytes of RAM
//! - No heap allocation anywhere
//! - Sampling path is bounded-time and lock-free
//!
//! ```
//! use gauge_core::{HistoryTracker, SampleAverager};
//!
//! let mut history: HistoryTracker<u16, 8> = HistoryTracker::new();
//! let mut averager = SampleAverager::new(4)?;
//!
//! // Interrupt side
//! for raw in [510, 512, 514, 516] {
//!     averager.add_sample(raw);
//! }
//!
//! // Main loop side
//! if let Some(measurement) = averager.poll() {
//!     history.insert(measurement);
//! }
//! assert_eq!(history.max(), Some(513));
//! # Ok::<(), gauge_core::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod averager;
pub mod config;
pub mod constants;
pub mod errors;
pub mod history;
pub mod sensor;
pub mod traits;

// Public API
pub use averager::{Handoff, MeasurementConsumer, SampleAverager, SampleProducer};
pub use config::{MonitorConfig, SamplingConfig};
pub use errors::{ConfigError, ConfigResult};
pub use history::{HistoryTracker, MeasurementHistory};
pub use sensor::{PressureSensor, SensorCalibration};
pub use traits::{SamplingDriver, Subscriber};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
