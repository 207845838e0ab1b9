//! Sensor Specifications
//!
//! ADC characteristics and the transfer curve of the default pressure
//! transducer (0.4 V → 20 kPa, 4.65 V → 250 kPa absolute).

// ===== ADC =====

/// Number of distinct codes of a 10-bit converter.
pub const ADC_RESOLUTION_COUNTS: u16 = 1024;

/// Reference voltage when the converter runs from AVcc (V).
pub const ADC_REFERENCE_VOLTS: f32 = 5.0;

/// Highest single-ended input channel of the converter multiplexer.
pub const MAX_ADC_CHANNEL: u8 = 7;

// ===== PRESSURE TRANSDUCER =====

/// Output voltage at the low end of the transducer range (V).
pub const TRANSDUCER_LOW_VOLTS: f32 = 0.4;

/// Absolute pressure at the low end of the transducer range (kPa).
pub const TRANSDUCER_LOW_KPA: f32 = 20.0;

/// Output voltage at the high end of the transducer range (V).
pub const TRANSDUCER_HIGH_VOLTS: f32 = 4.65;

/// Absolute pressure at the high end of the transducer range (kPa).
pub const TRANSDUCER_HIGH_KPA: f32 = 250.0;

/// Empirical gain trim for the stock transducer.
///
/// The datasheet slope overreads by about 18% against a reference gauge;
/// the kPa/V slope is divided by this factor.
pub const TRANSDUCER_GAIN_TRIM: f32 = 1.18;

/// kPa to bar.
pub const BAR_PER_KPA: f32 = 0.01;

/// Gauge offset before atmospheric calibration (bar).
///
/// One standard atmosphere rounded to 1 bar, so an uncalibrated sensor reads
/// approximately gauge pressure.
pub const DEFAULT_BAR_OFFSET: f32 = -1.0;
