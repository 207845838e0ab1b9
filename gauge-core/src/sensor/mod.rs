//! Raw Reading to Pressure Conversion
//!
//! ## Overview
//!
//! The transducer outputs a voltage proportional to absolute pressure; the ADC
//! turns that voltage into a 10-bit code. Getting back to a gauge pressure is
//! three linear stages:
//!
//! ```text
//!   raw code ──► volts ──► kPa (absolute) ──► bar (gauge)
//!            ×5/1024    ×slope + offset    ×0.01 + bar_offset
//! ```
//!
//! Every stage is `y = scale × x + offset`, so the whole chain is one line.
//! It stays split into stages because each stage has a physical meaning that
//! can be checked with a multimeter or a reference gauge independently.
//!
//! ## Atmospheric Calibration
//!
//! The last stage's offset absorbs local atmospheric pressure. With the
//! port open to air, feed readings through
//! [`PressureSensor::calibrate_atmospheric`]: the readings are averaged with
//! the same integer incremental mean the sample averager uses, and the offset
//! is chosen so that mean reads exactly 0 bar.
//!
//! ## Example
//!
//! ```rust
//! use gauge_core::sensor::PressureSensor;
//!
//! let mut sensor = PressureSensor::default();
//!
//! // port vented to atmosphere during startup
//! for raw in [205, 207, 206] {
//!     sensor.calibrate_atmospheric(raw);
//! }
//!
//! assert!(sensor.convert_to_bar(206).abs() < 1e-6);
//! assert!(sensor.convert_to_bar(600) > 0.0);
//! ```

mod calibration;
mod pressure;

pub use calibration::SensorCalibration;
pub use pressure::PressureSensor;
