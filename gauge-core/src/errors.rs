//! Error Types for Construction-Time Misconfiguration
//!
//! ## Design Philosophy
//!
//! Everything in this crate that runs in steady state is total: `add_sample`,
//! `poll` and `insert` cannot fail once their owners exist. The only failures
//! are configuration mistakes, and those must surface at startup rather than
//! degrade into a division by zero inside an interrupt handler.
//!
//! 1. **Small Size**: variants carry at most two bytes of context or a
//!    `&'static str`, so the error stays `Copy` and cheap to return.
//!
//! 2. **No Heap Allocation**: messages are static, the enum works unchanged
//!    on `no_std` targets.
//!
//! 3. **Actionable**: each variant names the field that must change.
//!
//! ## What Is Not an Error
//!
//! - Registering more subscribers than a registry has slots. The handle is
//!   dropped and `subscribe_*` returns `false`; see [`crate::averager::Registry`].
//! - A zero-capacity history. `HistoryTracker<T, 0>` fails to compile.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use gauge_core::{ConfigError, SampleAverager};
//!
//! match SampleAverager::new(0) {
//!     Ok(_) => unreachable!(),
//!     Err(ConfigError::ZeroWindow) => {
//!         // fix the firmware configuration, there is nothing to retry
//!     }
//!     Err(other) => panic!("unexpected: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration and construction
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors, reported once at construction time
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// An averaging window must contain at least one sample
    #[error("Window size must be at least one sample")]
    ZeroWindow,

    /// ADC input channel does not exist on the converter
    #[error("ADC channel {channel} outside [0, {max}]")]
    InvalidChannel {
        /// Requested channel
        channel: u8,
        /// Highest channel the converter multiplexes
        max: u8,
    },

    /// Timer compare value of zero would trigger on every tick
    #[error("Sampling period must be at least one timer tick")]
    ZeroTicks,

    /// Timer clock divider of zero stops the timer
    #[error("Timer prescaler must be non-zero")]
    ZeroPrescaler,

    /// Conversion coefficients cannot produce a usable reading
    #[error("Invalid calibration: {reason}")]
    InvalidCalibration {
        /// Which coefficient is unusable
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroWindow =>
                defmt::write!(fmt, "Window size is zero"),
            Self::InvalidChannel { channel, max } =>
                defmt::write!(fmt, "ADC channel {} outside [0, {}]", channel, max),
            Self::ZeroTicks =>
                defmt::write!(fmt, "Sampling period is zero ticks"),
            Self::ZeroPrescaler =>
                defmt::write!(fmt, "Timer prescaler is zero"),
            Self::InvalidCalibration { reason } =>
                defmt::write!(fmt, "Invalid calibration: {}", reason),
        }
    }
}
