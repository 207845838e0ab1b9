use crate::{
    constants::sensors::{
        ADC_REFERENCE_VOLTS, ADC_RESOLUTION_COUNTS, BAR_PER_KPA, DEFAULT_BAR_OFFSET,
        TRANSDUCER_GAIN_TRIM, TRANSDUCER_HIGH_KPA, TRANSDUCER_HIGH_VOLTS, TRANSDUCER_LOW_KPA,
        TRANSDUCER_LOW_VOLTS,
    },
    errors::{ConfigError, ConfigResult},
};

/// Coefficients of the three linear conversion stages
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorCalibration {
    /// Volts per ADC count
    pub volts_per_count: f32,
    /// Volts at ADC code 0
    pub volt_offset: f32,
    /// kPa per volt
    pub kpa_per_volt: f32,
    /// kPa at 0 V
    pub kpa_offset: f32,
    /// bar per kPa
    pub bar_per_kpa: f32,
    /// Gauge offset in bar, rewritten by atmospheric calibration
    pub bar_offset: f32,
}

impl Default for SensorCalibration {
    fn default() -> Self {
        Self::from_transfer_curve(
            ADC_REFERENCE_VOLTS,
            ADC_RESOLUTION_COUNTS,
            (TRANSDUCER_LOW_VOLTS, TRANSDUCER_LOW_KPA),
            (TRANSDUCER_HIGH_VOLTS, TRANSDUCER_HIGH_KPA),
            TRANSDUCER_GAIN_TRIM,
        )
    }
}

impl SensorCalibration {
    /// Derive coefficients from two points of a transducer datasheet curve
    ///
    /// `low` and `high` are `(volts, kPa)` pairs. The slope between them is
    /// divided by `gain_trim`, and the intercept is placed so the low point
    /// stays exact after trimming. Degenerate inputs (equal voltages, zero
    /// trim) produce non-finite coefficients that [`validate`](Self::validate)
    /// rejects.
    pub fn from_transfer_curve(
        reference_volts: f32,
        resolution_counts: u16,
        low: (f32, f32),
        high: (f32, f32),
        gain_trim: f32,
    ) -> Self {
        let (low_volts, low_kpa) = low;
        let (high_volts, high_kpa) = high;
        let kpa_per_volt = (high_kpa - low_kpa) / (high_volts - low_volts) / gain_trim;

        Self {
            volts_per_count: reference_volts / f32::from(resolution_counts),
            volt_offset: 0.0,
            kpa_per_volt,
            kpa_offset: low_kpa - kpa_per_volt * low_volts,
            bar_per_kpa: BAR_PER_KPA,
            bar_offset: DEFAULT_BAR_OFFSET,
        }
    }

    /// Reject coefficients that cannot produce a meaningful reading
    pub fn validate(&self) -> ConfigResult<()> {
        let all = [
            self.volts_per_count,
            self.volt_offset,
            self.kpa_per_volt,
            self.kpa_offset,
            self.bar_per_kpa,
            self.bar_offset,
        ];
        if all.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::InvalidCalibration {
                reason: "coefficient is not a finite number",
            });
        }

        if self.volts_per_count == 0.0 || self.kpa_per_volt == 0.0 || self.bar_per_kpa == 0.0 {
            return Err(ConfigError::InvalidCalibration {
                reason: "stage gain is zero",
            });
        }

        Ok(())
    }

    /// Raw ADC code to volts
    #[inline]
    pub fn volts(&self, raw: u16) -> f32 {
        self.volts_per_count * f32::from(raw) + self.volt_offset
    }

    /// Volts to absolute kPa
    #[inline]
    pub fn kpa(&self, volts: f32) -> f32 {
        self.kpa_per_volt * volts + self.kpa_offset
    }

    /// Absolute kPa to gauge bar
    #[inline]
    pub fn bar(&self, kpa: f32) -> f32 {
        self.bar_per_kpa * kpa + self.bar_offset
    }
}
