//! Acquisition Configuration
//!
//! Construction-time parameters for the whole chain: how often the driver
//! samples, how many samples make a measurement, and how raw readings convert
//! to pressure. Nothing here changes after startup.
//!
//! ```rust
//! use gauge_core::{MonitorConfig, SamplingConfig};
//!
//! let config = MonitorConfig {
//!     window_size: 32,
//!     sampling: SamplingConfig::new(249, 2),
//!     ..MonitorConfig::default()
//! };
//! config.validate()?;
//!
//! // 16 MHz / 64 / 250 = 1 kHz sampling, 32 samples per measurement
//! assert_eq!(config.measurement_rate_hz(16_000_000), 31.25);
//! # Ok::<(), gauge_core::ConfigError>(())
//! ```

use crate::{
    constants::{DEFAULT_SAMPLE_TICKS, DEFAULT_TIMER_PRESCALER, DEFAULT_WINDOW_SIZE, MAX_ADC_CHANNEL},
    errors::{ConfigError, ConfigResult},
    sensor::SensorCalibration,
};

/// Timer/ADC settings handed to the host sampling driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplingConfig {
    /// Timer compare value; one conversion every `ticks + 1` timer clocks
    pub ticks: u16,
    /// ADC multiplexer input
    pub channel: u8,
    /// Timer clock divider
    pub prescaler: u16,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_SAMPLE_TICKS,
            channel: 0,
            prescaler: DEFAULT_TIMER_PRESCALER,
        }
    }
}

impl SamplingConfig {
    /// Sample on `channel` every `ticks + 1` timer clocks at the default prescaler
    pub const fn new(ticks: u16, channel: u8) -> Self {
        Self {
            ticks,
            channel,
            prescaler: DEFAULT_TIMER_PRESCALER,
        }
    }

    /// Check the settings against the converter and timer limits
    pub fn validate(&self) -> ConfigResult<()> {
        if self.ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }

        if self.prescaler == 0 {
            return Err(ConfigError::ZeroPrescaler);
        }

        if self.channel > MAX_ADC_CHANNEL {
            return Err(ConfigError::InvalidChannel {
                channel: self.channel,
                max: MAX_ADC_CHANNEL,
            });
        }

        Ok(())
    }

    /// Raw samples per second for a given CPU clock
    ///
    /// Returns 0.0 for a zero prescaler instead of dividing by zero.
    pub fn sample_rate_hz(&self, cpu_hz: u32) -> f32 {
        // ≤ 65535 × 65536, fits in u32
        let cycles_per_sample = u32::from(self.prescaler) * (u32::from(self.ticks) + 1);
        if cycles_per_sample == 0 {
            return 0.0;
        }

        cpu_hz as f32 / cycles_per_sample as f32
    }
}

/// Everything needed to bring up one acquisition channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// Raw samples per averaged measurement
    pub window_size: u16,
    /// Timer/ADC settings
    pub sampling: SamplingConfig,
    /// Raw reading to pressure conversion
    pub calibration: SensorCalibration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            sampling: SamplingConfig::default(),
            calibration: SensorCalibration::default(),
        }
    }
}

impl MonitorConfig {
    /// Report the first configuration error, if any
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }

        self.sampling.validate()?;
        self.calibration.validate()
    }

    /// Averaged measurements per second for a given CPU clock
    pub fn measurement_rate_hz(&self, cpu_hz: u32) -> f32 {
        if self.window_size == 0 {
            return 0.0;
        }

        self.sampling.sample_rate_hz(cpu_hz) / f32::from(self.window_size)
    }
}
